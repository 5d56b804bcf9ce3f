//! The simulation pipeline.
//!
//! [`simulate`] is the single entry point: a pure function from an
//! immutable circuit snapshot to a [`SimulationResult`]. Every failure
//! mode degrades to a well-defined result instead of an error:
//!
//! - Empty circuit or no ground reference: the minimal "incomplete"
//!   result, solver never invoked
//! - Battery shorted at its own terminals: excluded from the netlist,
//!   its 1-based position recorded, the rest still simulates
//! - Unsolvable (singular) system: every battery position flagged, all
//!   other fields zeroed - a conservative "check your wiring" signal

mod interpret;
mod results;

pub use results::{BulbState, SimulationResult};

use crate::circuit::CircuitSnapshot;
use crate::netlist::translate;
use crate::solver::DcSolver;
use crate::{
    BATTERY_INTERNAL_RESISTANCE, BATTERY_VOLTAGE, BULB_BURNOUT_CURRENT, BULB_NORMAL_CURRENT,
    BULB_ON_CURRENT, BULB_RESISTANCE, SHORT_CIRCUIT_CURRENT,
};

use interpret::interpret;

/// Configuration for a simulation pass.
///
/// The defaults are the fixed parameters of the kit's domain model;
/// embedders and tests can override them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Battery EMF in volts.
    pub battery_voltage: f64,
    /// Battery internal series resistance in ohms.
    pub battery_internal_resistance: f64,
    /// Bulb filament resistance in ohms.
    pub bulb_resistance: f64,
    /// Minimum bulb current to register as "on" (amps).
    pub on_current: f64,
    /// Normal (brightness = 1) bulb current (amps).
    pub normal_current: f64,
    /// Bulb burnout current (amps).
    pub burnout_current: f64,
    /// Bulb-less total current treated as a wiring fault (amps).
    pub short_circuit_current: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            battery_voltage: BATTERY_VOLTAGE,
            battery_internal_resistance: BATTERY_INTERNAL_RESISTANCE,
            bulb_resistance: BULB_RESISTANCE,
            on_current: BULB_ON_CURRENT,
            normal_current: BULB_NORMAL_CURRENT,
            burnout_current: BULB_BURNOUT_CURRENT,
            short_circuit_current: SHORT_CIRCUIT_CURRENT,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the battery EMF (in volts).
    pub fn with_battery_voltage(mut self, volts: f64) -> Self {
        self.battery_voltage = volts;
        self
    }

    /// Set the bulb filament resistance (in ohms).
    pub fn with_bulb_resistance(mut self, ohms: f64) -> Self {
        self.bulb_resistance = ohms;
        self
    }

    /// Set the bulb burnout current (in amps).
    pub fn with_burnout_current(mut self, amps: f64) -> Self {
        self.burnout_current = amps;
        self
    }
}

/// Run one simulation pass over a snapshot.
///
/// Pure and idempotent: two calls with an identical snapshot produce
/// structurally identical results, and no state survives the call.
pub fn simulate<S: DcSolver + ?Sized>(
    circuit: &CircuitSnapshot,
    solver: &S,
    config: &SimulationConfig,
) -> SimulationResult {
    // Incomplete input (nothing placed, or no ground reference) degrades
    // to the minimal result without touching the solver.
    let translation = match translate(circuit, config) {
        Ok(translation) => translation,
        Err(_) => return SimulationResult::incomplete(),
    };

    match solver.solve(&translation.netlist) {
        Ok(solution) => interpret(circuit, &translation, &solution, config),
        Err(_) => all_batteries_flagged(circuit),
    }
}

/// The conservative degradation for a failed solve: every battery
/// position flagged, everything else at its zeroed default.
fn all_batteries_flagged(circuit: &CircuitSnapshot) -> SimulationResult {
    SimulationResult {
        battery_indices: (1..=circuit.batteries().count()).collect(),
        ..SimulationResult::default()
    }
}

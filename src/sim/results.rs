//! Simulation output types.

use std::collections::HashMap;

use crate::circuit::ComponentId;

/// Per-bulb lighting state for one simulation pass.
///
/// All fields default to zero/off. An incomplete circuit or a failed
/// solve produces an empty state map; consumers treat an absent entry as
/// all defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulbState {
    /// Lit: above the 1 mA threshold and not burned out
    pub is_on: bool,
    /// Failed by exceeding the 50 mA burnout current
    pub is_burned_out: bool,
    /// Unitless rendering scalar: 0 at 1 mA, 1 at 18 mA, clamped to [0, 2]
    pub brightness: f64,
    /// Filament current magnitude in amps
    pub current: f64,
    /// Voltage drop magnitude across the bulb in volts
    pub voltage: f64,
    /// Signed net voltage at the first terminal
    pub voltage_node1: f64,
    /// Signed net voltage at the second terminal
    pub voltage_node2: f64,
    /// Dissipated power in watts
    pub power: f64,
}

/// Aggregate output of one simulation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationResult {
    /// True when at least one bulb lit, or current flows with no bulb
    pub has_closed_loop: bool,
    /// Number of lit bulbs
    pub bulbs_on_count: usize,
    /// Per-bulb state, keyed by component id
    pub bulb_states: HashMap<ComponentId, BulbState>,
    /// Solved voltages by net display name; ground (0 V) is omitted
    pub node_voltages: HashMap<String, f64>,
    /// Magnitude of the current through the first battery with a solved
    /// branch current, in amps
    pub total_current: f64,
    /// 1-based positions (appearance order) of batteries flagged as
    /// mis-wired: self-shorted, shorted together, or blanket-flagged
    /// after a failed solve
    pub battery_indices: Vec<usize>,
}

impl SimulationResult {
    /// The minimal result for an incomplete circuit: open loop, zero
    /// counts, empty maps.
    pub fn incomplete() -> Self {
        Self::default()
    }
}

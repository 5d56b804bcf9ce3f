//! Interpretation of solved voltages and currents.
//!
//! Turns the raw solver output back into user-facing state: per-bulb
//! on/burnout/brightness, closed-loop detection, and the no-load short
//! heuristic that flags batteries wired against each other.

use crate::circuit::CircuitSnapshot;
use crate::netlist::Translation;
use crate::solver::DcSolution;

use super::results::{BulbState, SimulationResult};
use super::SimulationConfig;

pub(super) fn interpret(
    circuit: &CircuitSnapshot,
    translation: &Translation,
    solution: &DcSolution,
    config: &SimulationConfig,
) -> SimulationResult {
    let mut result = SimulationResult {
        node_voltages: solution.voltages.clone(),
        battery_indices: translation.shorted_batteries.clone(),
        ..SimulationResult::default()
    };

    // Magnitude of the first solved battery branch current, in
    // appearance order. Self-shorted batteries have no branch.
    result.total_current = circuit
        .batteries()
        .find_map(|b| solution.branch_current(b.id))
        .map(f64::abs)
        .unwrap_or(0.0);

    for bulb in circuit.bulbs() {
        let v1 = terminal_voltage(translation, solution, bulb.terminals[0]);
        let v2 = terminal_voltage(translation, solution, bulb.terminals[1]);

        let drop = (v1 - v2).abs();
        let current = drop / config.bulb_resistance;

        let is_burned_out = current > config.burnout_current;
        let is_on = !is_burned_out && current > config.on_current;
        let brightness = if is_on {
            let span = config.normal_current - config.on_current;
            ((current - config.on_current) / span).clamp(0.0, 2.0)
        } else {
            0.0
        };

        if is_on {
            result.has_closed_loop = true;
            result.bulbs_on_count += 1;
        }

        result.bulb_states.insert(
            bulb.id,
            BulbState {
                is_on,
                is_burned_out,
                brightness,
                current,
                voltage: drop,
                voltage_node1: v1,
                voltage_node2: v2,
                power: drop * current,
            },
        );
    }

    // Current flowing with no lit bulb still closes the loop (a wire
    // bridging plus to minus, or a potentiometer-only path).
    if !result.has_closed_loop && result.total_current > config.on_current {
        result.has_closed_loop = true;
    }

    // No-load short heuristic: heavy current with every bulb dark means
    // the wiring itself is the fault. Flag every battery; this replaces
    // any narrower finding because it is the actionable problem.
    let battery_count = circuit.batteries().count();
    if result.total_current > config.short_circuit_current
        && result.bulbs_on_count == 0
        && battery_count > 0
    {
        result.battery_indices = (1..=battery_count).collect();
    }

    result
}

/// Signed voltage of the net a terminal belongs to. `"gnd"` reads as
/// exactly 0 V regardless of the solution map contents.
fn terminal_voltage(
    translation: &Translation,
    solution: &DcSolution,
    node: crate::circuit::NodeId,
) -> f64 {
    translation
        .nets
        .name_of(node)
        .map(|name| solution.voltage(name))
        .unwrap_or(0.0)
}

//! # Breadboard Core
//!
//! A DC circuit simulator core for breadboard-style electronics kits.
//!
//! This library provides:
//! - A snapshot data model for batteries, bulbs, potentiometers, and wires
//! - Net extraction (wire-connected terminals merged via a disjoint set)
//! - Translation of the component graph into an abstract DC netlist
//! - A pluggable DC solver boundary with a built-in MNA implementation
//! - Interpretation of solved voltages/currents into per-bulb lighting,
//!   burnout, and brightness state plus circuit-level fault diagnostics
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Input data model: components, terminal nodes, wires
//! - [`components`] - Component variants (battery, bulb, potentiometer)
//! - [`nets`] - Disjoint-set net merging and net naming
//! - [`netlist`] - Translation from the component graph to solver elements
//! - [`solver`] - The DC solver boundary and the built-in MNA solver
//! - [`sim`] - The simulation pipeline and result interpretation
//!
//! ## Usage
//!
//! ```
//! use breadboard_core::{CircuitSnapshot, MnaSolver, SimulationConfig, simulate};
//!
//! let mut circuit = CircuitSnapshot::new();
//! let battery = circuit.add_battery();
//! let bulb = circuit.add_bulb();
//!
//! let (plus, minus) = circuit.battery_terminals(battery).unwrap();
//! let [a, b] = circuit.bulb_terminals(bulb).unwrap();
//! circuit.connect(plus, a);
//! circuit.connect(b, minus);
//!
//! let result = simulate(&circuit, &MnaSolver::new(), &SimulationConfig::default());
//! assert!(result.has_closed_loop);
//! assert_eq!(result.bulbs_on_count, 1);
//! ```
//!
//! ## Simulation Method
//!
//! Each pass is a pure function of the current snapshot:
//!
//! 1. Merge wire-connected terminals into electrical nets (union-find)
//! 2. Pick the ground net (the net holding a battery minus terminal)
//! 3. Emit voltage sources and resistors against net indices
//! 4. Solve the DC operating point (nodal analysis, LU decomposition)
//! 5. Map node voltages and branch currents back onto bulbs and batteries
//!
//! Batteries are modeled as an ideal 9 V source in series with a small
//! internal resistance, which keeps parallel battery packs well-posed and
//! produces realistic short-circuit currents.

pub mod circuit;
pub mod components;
pub mod error;
pub mod netlist;
pub mod nets;
pub mod sim;
pub mod solver;

// Re-export main types for convenience
pub use circuit::CircuitSnapshot;
pub use error::{BreadboardError, Result};
pub use sim::{simulate, BulbState, SimulationConfig, SimulationResult};
pub use solver::{DcSolution, DcSolver, MnaSolver};

/// Battery electromotive force in volts.
pub const BATTERY_VOLTAGE: f64 = 9.0;

/// Battery internal series resistance in ohms.
///
/// A strictly positive value keeps parallel same-voltage batteries from
/// producing a singular system and approximates real cell behavior.
pub const BATTERY_INTERNAL_RESISTANCE: f64 = 0.1;

/// Fixed bulb filament resistance in ohms (linear model).
pub const BULB_RESISTANCE: f64 = 500.0;

/// Minimum current through a bulb for it to register as "on" (amps).
pub const BULB_ON_CURRENT: f64 = 1e-3;

/// Normal bulb operating current: 9 V across 500 ohms (amps).
pub const BULB_NORMAL_CURRENT: f64 = 18e-3;

/// Current above which a bulb burns out (amps).
pub const BULB_BURNOUT_CURRENT: f64 = 50e-3;

/// Total current above which a bulb-less circuit is treated as a
/// battery-against-battery or dead-short wiring fault (amps).
pub const SHORT_CIRCUIT_CURRENT: f64 = 100e-3;

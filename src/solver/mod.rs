//! The DC solver boundary.
//!
//! The pipeline never solves equations itself; it hands the abstract
//! netlist to a [`DcSolver`] and consumes the returned [`DcSolution`].
//! [`MnaSolver`] is the built-in implementation (nodal analysis with LU
//! decomposition); embedders can substitute their own engine behind the
//! same trait.
//!
//! ## Nodal analysis
//!
//! The built-in solver assembles a system Ax = z where:
//! - x contains non-ground net voltages, then one branch current per
//!   voltage source
//! - A holds resistor conductance stamps and source constraint rows
//! - z holds the source voltages
//!
//! A solution maps each non-ground net name to its voltage (ground is
//! implicitly 0 V) and each source's owning component to its branch
//! current. A singular system is reported as an error, never as NaNs.

mod mna;

pub use mna::MnaSolver;

use std::collections::HashMap;

use crate::circuit::ComponentId;
use crate::error::Result;
use crate::netlist::Netlist;

/// Minimum conductance stamped from every non-ground net to ground.
///
/// A detached fragment (a bulb with no path to ground) would otherwise
/// make the matrix singular and take the whole solve down with it. The
/// leak is nine orders of magnitude below the 1 mA "on" threshold.
pub const MIN_CONDUCTANCE: f64 = 1e-12;

/// A solved DC operating point.
#[derive(Debug, Clone, Default)]
pub struct DcSolution {
    /// Net display name -> solved voltage; ground is omitted
    pub voltages: HashMap<String, f64>,
    /// Voltage source (by owning component) -> solved branch current
    pub branch_currents: HashMap<ComponentId, f64>,
}

impl DcSolution {
    /// Voltage of a net by display name. `"gnd"` is always 0 V.
    pub fn voltage(&self, name: &str) -> f64 {
        if name == "gnd" {
            0.0
        } else {
            self.voltages.get(name).copied().unwrap_or(0.0)
        }
    }

    /// Branch current through a voltage source, if it was solved.
    pub fn branch_current(&self, source: ComponentId) -> Option<f64> {
        self.branch_currents.get(&source).copied()
    }
}

/// A DC operating-point solver.
pub trait DcSolver {
    /// Solve the netlist, or report an unsolvable (singular) system.
    fn solve(&self, netlist: &Netlist) -> Result<DcSolution>;
}

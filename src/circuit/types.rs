//! Core identifier types for circuit representation.

use std::fmt;

/// A unique identifier for a terminal node in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// A unique identifier for a component in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// A unique identifier for an electrical net, minted during translation.
/// Net 0 is always ground.
///
/// The integer handle is the internal join key; the `"gnd"` / `"net<k>"`
/// display names exist only for external reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetId(pub usize);

impl NetId {
    /// The ground net (always index 0).
    pub const GROUND: NetId = NetId(0);

    /// Check if this is the ground net.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "gnd")
        } else {
            write!(f, "net{}", self.0)
        }
    }
}

/// The electrical role of a terminal on its owning component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalRole {
    /// Positive terminal of a battery
    BatteryPlus,
    /// Negative terminal of a battery (candidate ground anchor)
    BatteryMinus,
    /// First terminal of a bulb or potentiometer
    TerminalA,
    /// Second terminal of a bulb or potentiometer
    TerminalB,
}

/// A 2D position on the board. Carried for the editing layer; the
/// analysis pipeline ignores it beyond node identity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

//! Load components: Bulb and Potentiometer.

use crate::circuit::{ComponentId, NodeId};
use crate::BULB_RESISTANCE;

/// A light bulb component.
///
/// Modeled as a fixed linear 500 ohm resistance; brightness and burnout
/// are derived from the solved current, not from the device model.
#[derive(Debug, Clone)]
pub struct Bulb {
    pub id: ComponentId,
    pub terminals: [NodeId; 2],
}

impl Bulb {
    /// Create a new bulb with its two terminal nodes.
    pub fn new(id: ComponentId, terminals: [NodeId; 2]) -> Self {
        Self { id, terminals }
    }

    /// Filament resistance in ohms.
    pub fn resistance(&self) -> f64 {
        BULB_RESISTANCE
    }
}

/// A two-terminal potentiometer component.
///
/// The resistance is adjustable but snaps to a fixed preset ladder, the
/// same way the physical kit's dial clicks between detents.
#[derive(Debug, Clone)]
pub struct Potentiometer {
    pub id: ComponentId,
    pub terminals: [NodeId; 2],
    resistance: f64,
}

impl Potentiometer {
    /// The preset resistance ladder, in ohms.
    pub const PRESETS: [f64; 7] = [100.0, 250.0, 500.0, 1_000.0, 2_000.0, 5_000.0, 10_000.0];

    /// The default dial position.
    pub const DEFAULT_RESISTANCE: f64 = 500.0;

    /// Create a new potentiometer at the default 500 ohm detent.
    pub fn new(id: ComponentId, terminals: [NodeId; 2]) -> Self {
        Self {
            id,
            terminals,
            resistance: Self::DEFAULT_RESISTANCE,
        }
    }

    /// Get the current resistance in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Set the resistance, snapping to the nearest preset detent.
    pub fn set_resistance(&mut self, ohms: f64) {
        self.resistance = Self::PRESETS
            .iter()
            .copied()
            .min_by(|a, b| (a - ohms).abs().total_cmp(&(b - ohms).abs()))
            .unwrap_or(Self::DEFAULT_RESISTANCE);
    }
}

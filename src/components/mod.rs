//! Component models for the breadboard kit.
//!
//! Three component kinds exist:
//! - Battery: fixed 9 V EMF with a small internal series resistance
//! - Bulb: fixed 500 ohm linear filament
//! - Potentiometer: adjustable resistance from a preset ladder
//!
//! Each component owns the [`NodeId`](crate::circuit::NodeId)s of its two
//! terminals, so a component with a missing or extra terminal cannot be
//! constructed.

mod loads;
mod sources;

pub use loads::{Bulb, Potentiometer};
pub use sources::Battery;

use crate::circuit::ComponentId;

/// A circuit component.
#[derive(Debug, Clone)]
pub enum Component {
    Battery(Battery),
    Bulb(Bulb),
    Potentiometer(Potentiometer),
}

impl Component {
    /// Get the component's unique id.
    pub fn id(&self) -> ComponentId {
        match self {
            Component::Battery(b) => b.id,
            Component::Bulb(b) => b.id,
            Component::Potentiometer(p) => p.id,
        }
    }

    /// Check if this component is a battery.
    pub fn is_battery(&self) -> bool {
        matches!(self, Component::Battery(_))
    }

    /// Check if this component is a bulb.
    pub fn is_bulb(&self) -> bool {
        matches!(self, Component::Bulb(_))
    }
}

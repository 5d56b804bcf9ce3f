//! Source components: the battery.

use crate::circuit::{ComponentId, NodeId};

/// A battery component.
///
/// Electrically a 9 V ideal source in series with a 0.1 ohm internal
/// resistance (see [`crate::BATTERY_VOLTAGE`] and
/// [`crate::BATTERY_INTERNAL_RESISTANCE`]). The split between source and
/// internal resistor happens at translation time; the component itself
/// only records its two terminals.
#[derive(Debug, Clone)]
pub struct Battery {
    pub id: ComponentId,
    /// Terminal node on the positive side
    pub plus: NodeId,
    /// Terminal node on the negative side (candidate ground anchor)
    pub minus: NodeId,
}

impl Battery {
    /// Create a new battery with its two terminal nodes.
    pub fn new(id: ComponentId, plus: NodeId, minus: NodeId) -> Self {
        Self { id, plus, minus }
    }
}

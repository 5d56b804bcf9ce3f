//! Circuit snapshot structure.
//!
//! [`CircuitSnapshot`] holds the three editor-facing collections: typed
//! components, terminal nodes, and wire connections. Components are built
//! through the `add_*` methods, which mint the terminal nodes with their
//! roles in one step - a battery without a minus terminal or a bulb with
//! three terminals cannot be represented.

use crate::components::{Battery, Bulb, Component, Potentiometer};

use super::types::{ComponentId, NodeId, Position, TerminalRole};

/// A terminal node: one electrical connection point on a component.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// The component this terminal belongs to
    pub component: ComponentId,
    /// The terminal's electrical role on that component
    pub role: TerminalRole,
    /// Board position, carried for the editing layer only
    pub position: Position,
}

/// An ideal wire between two terminal nodes. Unordered; duplicates are
/// harmless since net merging is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub a: NodeId,
    pub b: NodeId,
}

/// An immutable-per-pass snapshot of the board: components, terminal
/// nodes, and wires. Every simulation pass recomputes everything from
/// these collections; no analysis state is carried between passes.
#[derive(Debug, Clone, Default)]
pub struct CircuitSnapshot {
    components: Vec<Component>,
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    next_component: usize,
    next_node: usize,
}

impl CircuitSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    fn mint_node(&mut self, component: ComponentId, role: TerminalRole) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.push(Node {
            id,
            component,
            role,
            position: Position::default(),
        });
        id
    }

    /// Add a battery; returns its component id.
    pub fn add_battery(&mut self) -> ComponentId {
        let id = ComponentId(self.next_component);
        self.next_component += 1;
        let plus = self.mint_node(id, TerminalRole::BatteryPlus);
        let minus = self.mint_node(id, TerminalRole::BatteryMinus);
        self.components.push(Component::Battery(Battery::new(id, plus, minus)));
        id
    }

    /// Add a bulb; returns its component id.
    pub fn add_bulb(&mut self) -> ComponentId {
        let id = ComponentId(self.next_component);
        self.next_component += 1;
        let a = self.mint_node(id, TerminalRole::TerminalA);
        let b = self.mint_node(id, TerminalRole::TerminalB);
        self.components.push(Component::Bulb(Bulb::new(id, [a, b])));
        id
    }

    /// Add a potentiometer at the default detent; returns its component id.
    pub fn add_potentiometer(&mut self) -> ComponentId {
        let id = ComponentId(self.next_component);
        self.next_component += 1;
        let a = self.mint_node(id, TerminalRole::TerminalA);
        let b = self.mint_node(id, TerminalRole::TerminalB);
        self.components
            .push(Component::Potentiometer(Potentiometer::new(id, [a, b])));
        id
    }

    /// Remove a component along with its terminals and any wires
    /// touching them. No-op if the id is unknown.
    pub fn remove_component(&mut self, id: ComponentId) {
        self.components.retain(|c| c.id() != id);
        let removed: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.component == id)
            .map(|n| n.id)
            .collect();
        self.nodes.retain(|n| n.component != id);
        self.connections
            .retain(|w| !removed.contains(&w.a) && !removed.contains(&w.b));
    }

    /// Wire two terminals together. Duplicate wires are tolerated.
    pub fn connect(&mut self, a: NodeId, b: NodeId) {
        self.connections.push(Connection { a, b });
    }

    /// Remove every wire between two terminals (either orientation).
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) {
        self.connections
            .retain(|w| !(w.a == a && w.b == b) && !(w.a == b && w.b == a));
    }

    /// All components, in order of appearance.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// All terminal nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All wires.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Batteries in order of appearance (the order behind 1-based fault
    /// positions in diagnostics).
    pub fn batteries(&self) -> impl Iterator<Item = &Battery> {
        self.components.iter().filter_map(|c| match c {
            Component::Battery(b) => Some(b),
            _ => None,
        })
    }

    /// Bulbs in order of appearance.
    pub fn bulbs(&self) -> impl Iterator<Item = &Bulb> {
        self.components.iter().filter_map(|c| match c {
            Component::Bulb(b) => Some(b),
            _ => None,
        })
    }

    /// Potentiometers in order of appearance.
    pub fn potentiometers(&self) -> impl Iterator<Item = &Potentiometer> {
        self.components.iter().filter_map(|c| match c {
            Component::Potentiometer(p) => Some(p),
            _ => None,
        })
    }

    /// Look up a component by id.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Look up a terminal node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The (plus, minus) terminals of a battery.
    pub fn battery_terminals(&self, id: ComponentId) -> Option<(NodeId, NodeId)> {
        match self.component(id)? {
            Component::Battery(b) => Some((b.plus, b.minus)),
            _ => None,
        }
    }

    /// The two terminals of a bulb.
    pub fn bulb_terminals(&self, id: ComponentId) -> Option<[NodeId; 2]> {
        match self.component(id)? {
            Component::Bulb(b) => Some(b.terminals),
            _ => None,
        }
    }

    /// The two terminals of a potentiometer.
    pub fn potentiometer_terminals(&self, id: ComponentId) -> Option<[NodeId; 2]> {
        match self.component(id)? {
            Component::Potentiometer(p) => Some(p.terminals),
            _ => None,
        }
    }

    /// Set a potentiometer's resistance (snaps to the preset ladder).
    /// No-op if the id is not a potentiometer.
    pub fn set_potentiometer_resistance(&mut self, id: ComponentId, ohms: f64) {
        if let Some(Component::Potentiometer(p)) =
            self.components.iter_mut().find(|c| c.id() == id)
        {
            p.set_resistance(ohms);
        }
    }

    /// Move a terminal on the board (editing layer only).
    pub fn set_node_position(&mut self, id: NodeId, position: Position) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.position = position;
        }
    }

    /// True when there is nothing to analyze.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() || self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_terminals_have_roles() {
        let mut circuit = CircuitSnapshot::new();
        let battery = circuit.add_battery();
        let (plus, minus) = circuit.battery_terminals(battery).unwrap();

        assert_eq!(circuit.node(plus).unwrap().role, TerminalRole::BatteryPlus);
        assert_eq!(circuit.node(minus).unwrap().role, TerminalRole::BatteryMinus);
        assert_eq!(circuit.node(plus).unwrap().component, battery);
    }

    #[test]
    fn test_remove_component_drops_wires() {
        let mut circuit = CircuitSnapshot::new();
        let battery = circuit.add_battery();
        let bulb = circuit.add_bulb();
        let (plus, minus) = circuit.battery_terminals(battery).unwrap();
        let [a, b] = circuit.bulb_terminals(bulb).unwrap();
        circuit.connect(plus, a);
        circuit.connect(b, minus);

        circuit.remove_component(bulb);
        assert!(circuit.connections().is_empty());
        assert_eq!(circuit.components().len(), 1);
        assert_eq!(circuit.nodes().len(), 2);
    }

    #[test]
    fn test_disconnect_is_orientation_agnostic() {
        let mut circuit = CircuitSnapshot::new();
        let bulb = circuit.add_bulb();
        let [a, b] = circuit.bulb_terminals(bulb).unwrap();
        circuit.connect(a, b);
        circuit.connect(a, b);
        circuit.disconnect(b, a);
        assert!(circuit.connections().is_empty());
    }
}

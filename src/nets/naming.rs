//! Net identification and naming.
//!
//! After all wire unions are applied, every disjoint-set root is one
//! electrical net. [`NetMap`] pins the net holding a battery minus
//! terminal to ground ([`NetId::GROUND`]) and hands every other root the
//! next integer handle. Display names (`"gnd"`, `"net<k>"`) derive from
//! the handle for external reporting only; the handle itself is the join
//! key everywhere inside the crate.
//!
//! Net numbering follows the disjoint-set registration order and is not
//! part of the contract - callers may rely on `"gnd"` and on connectivity,
//! never on which net got which number.

use std::collections::HashMap;

use crate::circuit::{NetId, Node, NodeId, TerminalRole};

use super::union_find::DisjointSet;

/// Mapping from terminal nodes to electrical nets, with display names.
#[derive(Debug, Clone)]
pub struct NetMap {
    net_of: HashMap<NodeId, NetId>,
    /// Display names indexed by `NetId`; index 0 is always `"gnd"`
    names: Vec<String>,
    /// The disjoint-set root that became ground
    ground_root: NodeId,
}

impl NetMap {
    /// Build the net map from a fully-merged disjoint set and the node
    /// collection.
    ///
    /// Returns `None` when no node carries the `BatteryMinus` role: the
    /// circuit then has no 0 V reference and analysis must be skipped.
    pub fn build(merger: &mut DisjointSet<NodeId>, nodes: &[Node]) -> Option<Self> {
        let ground_anchor = nodes
            .iter()
            .find(|n| n.role == TerminalRole::BatteryMinus)?;
        let ground_root = merger.find(&ground_anchor.id);

        let mut net_ids: HashMap<NodeId, NetId> = HashMap::new();
        let mut names = vec!["gnd".to_string()];
        net_ids.insert(ground_root, NetId::GROUND);

        for root in merger.roots() {
            if root == ground_root {
                continue;
            }
            let id = NetId(names.len());
            names.push(id.to_string());
            net_ids.insert(root, id);
        }

        let net_of = nodes
            .iter()
            .map(|n| (n.id, net_ids[&merger.find(&n.id)]))
            .collect();

        Some(Self {
            net_of,
            names,
            ground_root,
        })
    }

    /// The net a terminal belongs to.
    pub fn net_of(&self, node: NodeId) -> Option<NetId> {
        self.net_of.get(&node).copied()
    }

    /// The display name of a terminal's net.
    pub fn name_of(&self, node: NodeId) -> Option<&str> {
        self.net_of(node).map(|id| self.net_name(id))
    }

    /// The display name of a net.
    pub fn net_name(&self, id: NetId) -> &str {
        &self.names[id.0]
    }

    /// The disjoint-set root chosen as ground.
    pub fn ground_root(&self) -> NodeId {
        self.ground_root
    }

    /// Number of nets, including ground and any synthetic nets.
    pub fn net_count(&self) -> usize {
        self.names.len()
    }

    /// Mint an additional net with an explicit name. Used by the
    /// translator for the synthetic internal net of each battery.
    pub fn push_net(&mut self, name: impl Into<String>) -> NetId {
        let id = NetId(self.names.len());
        self.names.push(name.into());
        id
    }

    /// The full name table, indexed by `NetId`.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CircuitSnapshot;

    fn merged(circuit: &CircuitSnapshot) -> DisjointSet<NodeId> {
        let mut merger = DisjointSet::new();
        for node in circuit.nodes() {
            merger.make_set(node.id);
        }
        for wire in circuit.connections() {
            merger.union(&wire.a, &wire.b);
        }
        merger
    }

    #[test]
    fn test_no_battery_means_no_ground() {
        let mut circuit = CircuitSnapshot::new();
        circuit.add_bulb();
        let mut merger = merged(&circuit);
        assert!(NetMap::build(&mut merger, circuit.nodes()).is_none());
    }

    #[test]
    fn test_ground_is_battery_minus_net() {
        let mut circuit = CircuitSnapshot::new();
        let battery = circuit.add_battery();
        let bulb = circuit.add_bulb();
        let (plus, minus) = circuit.battery_terminals(battery).unwrap();
        let [a, b] = circuit.bulb_terminals(bulb).unwrap();
        circuit.connect(plus, a);
        circuit.connect(b, minus);

        let mut merger = merged(&circuit);
        let nets = NetMap::build(&mut merger, circuit.nodes()).unwrap();

        assert_eq!(nets.name_of(minus), Some("gnd"));
        assert_eq!(nets.name_of(b), Some("gnd"));
        assert_eq!(nets.net_of(minus), Some(NetId::GROUND));
        // plus and the bulb's A terminal share a non-ground net
        assert_eq!(nets.net_of(plus), nets.net_of(a));
        assert_ne!(nets.net_of(plus), Some(NetId::GROUND));
    }

    #[test]
    fn test_every_net_gets_a_unique_name() {
        let mut circuit = CircuitSnapshot::new();
        circuit.add_battery();
        circuit.add_bulb();
        circuit.add_potentiometer();
        // No wires: six terminals, six nets

        let mut merger = merged(&circuit);
        let nets = NetMap::build(&mut merger, circuit.nodes()).unwrap();

        assert_eq!(nets.net_count(), 6);
        let mut names: Vec<&str> = circuit
            .nodes()
            .iter()
            .map(|n| nets.name_of(n.id).unwrap())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
        assert!(names.contains(&"gnd"));
        assert!(names.iter().all(|n| *n == "gnd" || n.starts_with("net")));
    }
}

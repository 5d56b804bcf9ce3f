//! Electrical net extraction.
//!
//! Wires are ideal conductors, so every group of transitively wired
//! terminals collapses into a single electrical net. The disjoint set
//! does the merging; [`NetMap`] picks ground and assigns stable handles
//! and display names for one simulation pass.

mod naming;
mod union_find;

pub use naming::NetMap;
pub use union_find::DisjointSet;

use crate::circuit::{CircuitSnapshot, NodeId};

/// Merge all wire-connected terminals of a snapshot into one disjoint set.
///
/// Terminals are registered in node insertion order so that root and net
/// numbering is deterministic for identical snapshots.
pub fn merge_nets(circuit: &CircuitSnapshot) -> DisjointSet<NodeId> {
    let mut merger = DisjointSet::new();
    for node in circuit.nodes() {
        merger.make_set(node.id);
    }
    for wire in circuit.connections() {
        merger.union(&wire.a, &wire.b);
    }
    merger
}

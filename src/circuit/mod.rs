//! Circuit snapshot representation.
//!
//! This module provides the input data model the editing layer hands to
//! the simulation pipeline: typed components, terminal nodes with roles,
//! and wire connections.

mod graph;
mod types;

pub use graph::{CircuitSnapshot, Connection, Node};
pub use types::*;

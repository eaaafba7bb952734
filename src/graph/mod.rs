//! Undirected weighted graph engine and its algorithms

mod edge;
mod engine;
mod path;
mod snapshot;
mod spanning;
mod traverse;

#[cfg(test)]
mod tests;

pub use edge::{Adjacent, EdgeTriple, NodeId, Weight};
pub use engine::GraphEngine;
pub use path::PathResult;
pub use snapshot::{GraphSnapshot, NodeView};

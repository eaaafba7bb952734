//! Binary search tree engine with optional AVL balancing

mod engine;
mod node;
mod rotation;
mod snapshot;

pub use engine::BalancedTreeEngine;
pub use node::TreeNodeId;
pub use snapshot::TreeSnapshot;

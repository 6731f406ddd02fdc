//! Branch tree structure and its construction

pub mod builder;
pub mod node;
pub mod traversal;

pub use builder::{TreeBuilder, MAX_SUPPORTED_DEPTH, WARN_DEPTH};
pub use node::{node_count_for_depth, BranchNode, BranchTree, NodeId};
pub use traversal::PreOrder;

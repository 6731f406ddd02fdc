//! The one traversal order used everywhere a node sequence matters.
//!
//! Id assignment, geometry registration and per-frame transform emission all
//! walk the tree through this module, so instance slots and emitted transforms
//! always line up. The order is pre-order: a node, then its A-slot subtree,
//! then its B-slot subtree. Every parent is visited before its children.

use super::node::BranchNode;

/// Read-only pre-order iterator
pub struct PreOrder<'a> {
    stack: Vec<&'a BranchNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a BranchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the A-slot child is popped first
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

pub fn preorder(root: &BranchNode) -> PreOrder<'_> {
    PreOrder { stack: vec![root] }
}

/// Mutable pre-order walk that threads a value from parent to children.
///
/// `visit` receives the node and the value its parent returned (`inherited`
/// for the root), and returns the value handed to the node's children.
pub fn visit_mut<S, F>(node: &mut BranchNode, inherited: S, visit: &mut F)
where
    S: Copy,
    F: FnMut(&mut BranchNode, S) -> S,
{
    let passed = visit(node, inherited);
    for child in node.children_mut() {
        visit_mut(child, passed, visit);
    }
}

use crate::animation::Behavior;
use crate::math::{Mat4, Transform};
use super::traversal::{self, PreOrder};

/// Dense index of a node in traversal order; doubles as the renderer's instance slot
pub type NodeId = usize;

/// One segment of the branch tree
#[derive(Debug, Clone)]
pub struct BranchNode {
    /// Slot index into the renderer's instance buffer
    pub id: NodeId,
    /// Owning node, `None` for the root
    pub parent: Option<NodeId>,
    /// Generation (0 = root)
    pub depth: u32,
    /// Animation attached by slot; `None` for the root
    pub behavior: Behavior,
    /// Transform relative to the parent frame, rewritten every frame
    pub local: Transform,
    /// Transform relative to the root, recomputed every frame
    pub world: Mat4,
    /// A-slot and B-slot children, in that order
    children: Option<Box<[BranchNode; 2]>>,
}

impl BranchNode {
    pub(crate) fn new(depth: u32, behavior: Behavior) -> Self {
        Self {
            id: 0,
            parent: None,
            depth,
            behavior,
            local: Transform::IDENTITY,
            world: Mat4::IDENTITY,
            children: None,
        }
    }

    pub(crate) fn set_children(&mut self, a: BranchNode, b: BranchNode) {
        self.children = Some(Box::new([a, b]));
    }

    /// Children in slot order (A first), empty for leaves
    pub fn children(&self) -> &[BranchNode] {
        match self.children.as_deref() {
            Some(pair) => pair,
            None => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut [BranchNode] {
        match self.children.as_deref_mut() {
            Some(pair) => pair,
            None => &mut [],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Total number of nodes in subtree
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(|c| c.count()).sum::<usize>()
    }

    /// Nodes of this subtree in id order
    pub fn iter_preorder(&self) -> PreOrder<'_> {
        traversal::preorder(self)
    }
}

/// A fully built tree: the root plus the figures the renderer needs up front
#[derive(Debug, Clone)]
pub struct BranchTree {
    root: BranchNode,
    max_depth: u32,
    node_count: usize,
}

impl BranchTree {
    pub(crate) fn new(root: BranchNode, max_depth: u32) -> Self {
        Self {
            root,
            max_depth,
            node_count: node_count_for_depth(max_depth),
        }
    }

    pub fn root(&self) -> &BranchNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut BranchNode {
        &mut self.root
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// All nodes in id order
    pub fn iter(&self) -> PreOrder<'_> {
        self.root.iter_preorder()
    }
}

/// `2^(max_depth + 1) - 1`. Grows explosively: depth 11 is 4095 nodes,
/// depth 20 is over two million.
pub fn node_count_for_depth(max_depth: u32) -> usize {
    (1usize << (max_depth + 1)) - 1
}

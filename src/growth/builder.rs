use crate::animation::Behavior;
use crate::error::TreeError;
use crate::mesh::GeometryCatalog;
use crate::render::Renderer;
use super::node::{node_count_for_depth, BranchNode, BranchTree, NodeId};
use super::traversal;

/// Deepest tree accepted; depth 20 is already over two million nodes
pub const MAX_SUPPORTED_DEPTH: u32 = 20;

/// Depths above this are built, but logged as a warning
pub const WARN_DEPTH: u32 = 14;

/// Builds the full binary branch tree and hands its slots to a renderer
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build a full binary tree of height `max_depth`.
    ///
    /// Every node above `max_depth` gets an A-slot child (`Behavior::A`) and a
    /// B-slot child (`Behavior::B`). Ids are assigned in traversal order.
    /// The same `max_depth` always yields the same shape and ids.
    pub fn build(max_depth: i32) -> Result<BranchTree, TreeError> {
        let max_depth = u32::try_from(max_depth).map_err(|_| {
            TreeError::InvalidArgument(format!("max_depth must be >= 0, got {max_depth}"))
        })?;

        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(TreeError::InvalidArgument(format!(
                "max_depth {max_depth} exceeds the supported maximum of {MAX_SUPPORTED_DEPTH}"
            )));
        }
        if max_depth > WARN_DEPTH {
            log::warn!(
                "max_depth {} produces {} branch nodes",
                max_depth,
                node_count_for_depth(max_depth)
            );
        }

        let mut root = grow(0, max_depth, Behavior::None);
        assign_ids(&mut root);

        let tree = BranchTree::new(root, max_depth);
        log::info!(
            "Built branch tree: depth {}, {} nodes",
            tree.max_depth(),
            tree.node_count()
        );
        Ok(tree)
    }

    /// Register one geometry handle per node with `renderer`, in id order.
    ///
    /// Registration happens once per renderer: a renderer that already holds
    /// slots is refused. Fails before making any call when the renderer cannot
    /// hold every node. Returns the number of registered slots.
    pub fn register_geometry<R>(
        tree: &BranchTree,
        renderer: &mut R,
        catalog: &GeometryCatalog,
    ) -> Result<usize, TreeError>
    where
        R: Renderer + ?Sized,
    {
        let existing = renderer.registered();
        if existing > 0 {
            return Err(TreeError::PreconditionViolated(format!(
                "renderer already holds {existing} registered slots"
            )));
        }

        let needed = tree.node_count();
        let capacity = renderer.capacity();
        if capacity < needed {
            return Err(TreeError::InvalidArgument(format!(
                "renderer holds {capacity} instances but the tree has {needed} nodes"
            )));
        }

        let mut registered = 0;
        for node in traversal::preorder(tree.root()) {
            if node.id != registered {
                return Err(TreeError::PreconditionViolated(format!(
                    "node id {} visited at slot {}",
                    node.id, registered
                )));
            }
            renderer.register_geometry(node.id, catalog.handle_for(node))?;
            registered += 1;
        }

        log::info!("Registered {} geometry slots", registered);
        Ok(registered)
    }
}

fn grow(depth: u32, max_depth: u32, behavior: Behavior) -> BranchNode {
    let mut node = BranchNode::new(depth, behavior);
    if depth < max_depth {
        node.set_children(
            grow(depth + 1, max_depth, Behavior::A),
            grow(depth + 1, max_depth, Behavior::B),
        );
    }
    node
}

fn assign_ids(root: &mut BranchNode) {
    let mut next: NodeId = 0;
    traversal::visit_mut(root, None, &mut |node, parent| {
        node.id = next;
        node.parent = parent;
        next += 1;
        Some(node.id)
    });
}

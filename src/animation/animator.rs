use crate::growth::{traversal, BranchTree};
use crate::math::Mat4;
use super::behavior::BehaviorSet;

/// Evaluates slot behaviors and propagates world transforms once per frame
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    behaviors: BehaviorSet,
    /// Output of the last step, reused between frames
    world_transforms: Vec<Mat4>,
}

impl FrameAnimator {
    pub fn new(behaviors: BehaviorSet) -> Self {
        Self {
            behaviors,
            world_transforms: Vec::new(),
        }
    }

    pub fn behaviors(&self) -> &BehaviorSet {
        &self.behaviors
    }

    /// Advance every node to `elapsed_seconds` and return world transforms in id order.
    ///
    /// Parents are always finished before their children. Tree shape is never touched.
    pub fn step(&mut self, tree: &mut BranchTree, elapsed_seconds: f64) -> &[Mat4] {
        let behaviors = &self.behaviors;
        let out = &mut self.world_transforms;
        out.clear();
        out.reserve(tree.node_count());

        traversal::visit_mut(tree.root_mut(), Mat4::IDENTITY, &mut |node, parent_world| {
            if let Some(local) = node.behavior.evaluate(elapsed_seconds, behaviors) {
                node.local = local;
            }
            node.world = parent_world.mul(&node.local.to_matrix());
            debug_assert_eq!(node.id, out.len(), "traversal drifted from id order");
            out.push(node.world);
            node.world
        });

        &self.world_transforms
    }
}

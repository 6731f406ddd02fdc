use crate::clock::Clock;
use crate::error::TreeError;
use crate::growth::{BranchTree, TreeBuilder};
use crate::mesh::GeometryCatalog;
use crate::render::Renderer;
use super::animator::FrameAnimator;
use super::behavior::BehaviorSet;

/// Lifecycle of the driver: nothing to animate until the tree is built
#[derive(Debug)]
enum DriverState {
    Unbuilt,
    Built { tree: BranchTree, registered: usize },
}

/// What one `tick` did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frames submitted so far, including this one
    pub frame: u64,
    pub elapsed_seconds: f64,
    pub instances: usize,
}

/// Owns the tree and its collaborators; the host calls `tick` once per frame
pub struct AnimationDriver<R: Renderer, C: Clock> {
    renderer: R,
    clock: C,
    animator: FrameAnimator,
    state: DriverState,
    frames: u64,
}

impl<R: Renderer, C: Clock> AnimationDriver<R, C> {
    pub fn new(renderer: R, clock: C, behaviors: BehaviorSet) -> Self {
        Self {
            renderer,
            clock,
            animator: FrameAnimator::new(behaviors),
            state: DriverState::Unbuilt,
            frames: 0,
        }
    }

    /// Build the tree and register its geometry. Only allowed once.
    pub fn build(&mut self, max_depth: i32, catalog: &GeometryCatalog) -> Result<usize, TreeError> {
        if self.is_built() {
            return Err(TreeError::PreconditionViolated(
                "tree is already built and registered".into(),
            ));
        }

        let tree = TreeBuilder::build(max_depth)?;
        let registered = TreeBuilder::register_geometry(&tree, &mut self.renderer, catalog)?;
        self.state = DriverState::Built { tree, registered };
        Ok(registered)
    }

    /// Animate to the clock's current time and submit one frame.
    ///
    /// Nothing is submitted when the tree is missing or the transform count
    /// disagrees with the registered slots.
    pub fn tick(&mut self) -> Result<FrameReport, TreeError> {
        let DriverState::Built { tree, registered } = &mut self.state else {
            return Err(TreeError::PreconditionViolated(
                "tick called before the tree was built".into(),
            ));
        };

        let elapsed_seconds = self.clock.elapsed_seconds();
        let transforms = self.animator.step(tree, elapsed_seconds);
        if transforms.len() != *registered {
            return Err(TreeError::PreconditionViolated(format!(
                "{} transforms for {} registered slots",
                transforms.len(),
                registered
            )));
        }

        self.renderer.submit_frame(transforms);
        self.frames += 1;

        Ok(FrameReport {
            frame: self.frames,
            elapsed_seconds,
            instances: transforms.len(),
        })
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, DriverState::Built { .. })
    }

    pub fn tree(&self) -> Option<&BranchTree> {
        match &self.state {
            DriverState::Built { tree, .. } => Some(tree),
            DriverState::Unbuilt => None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::math::Mat4;
    use crate::mesh::MeshParams;
    use crate::render::InstanceBuffer;

    fn driver(capacity: usize) -> AnimationDriver<InstanceBuffer, ManualClock> {
        AnimationDriver::new(
            InstanceBuffer::new(capacity),
            ManualClock::default(),
            BehaviorSet::default(),
        )
    }

    #[test]
    fn test_tick_before_build_fails() {
        let mut d = driver(8);
        assert!(matches!(d.tick(), Err(TreeError::PreconditionViolated(_))));
        assert_eq!(d.frames(), 0);
    }

    #[test]
    fn test_build_registers_every_slot() {
        let mut d = driver(64);
        let catalog = GeometryCatalog::new(MeshParams::default());
        assert_eq!(d.build(4, &catalog).unwrap(), 31);
        assert_eq!(d.renderer().registered(), 31);
        assert!(d.is_built());
    }

    #[test]
    fn test_build_twice_fails() {
        let mut d = driver(64);
        let catalog = GeometryCatalog::new(MeshParams::default());
        d.build(2, &catalog).unwrap();
        assert!(matches!(d.build(2, &catalog), Err(TreeError::PreconditionViolated(_))));
        assert_eq!(d.renderer().registered(), 7);
    }

    #[test]
    fn test_build_fails_when_renderer_too_small() {
        let mut d = driver(4);
        let catalog = GeometryCatalog::new(MeshParams::default());
        assert!(matches!(d.build(3, &catalog), Err(TreeError::InvalidArgument(_))));
        assert!(!d.is_built());
        assert!(d.tick().is_err());
    }

    #[test]
    fn test_tick_submits_clock_time() {
        let mut d = driver(16);
        let catalog = GeometryCatalog::new(MeshParams::default());
        d.build(3, &catalog).unwrap();

        d.clock_mut().set(1.25);
        let report = d.tick().unwrap();
        assert_eq!(report.frame, 1);
        assert_eq!(report.elapsed_seconds, 1.25);
        assert_eq!(report.instances, 15);
        assert_eq!(d.renderer().submitted_frames(), 1);

        // Slot 0 is the root, which never moves
        assert_eq!(d.renderer().matrix(0), Some(Mat4::IDENTITY));

        d.clock_mut().advance(0.5);
        assert_eq!(d.tick().unwrap().frame, 2);
    }

    #[test]
    fn test_tick_matches_direct_step() {
        let mut d = driver(16);
        let catalog = GeometryCatalog::new(MeshParams::default());
        d.build(3, &catalog).unwrap();
        d.clock_mut().set(3.5);
        d.tick().unwrap();

        let mut tree = TreeBuilder::build(3).unwrap();
        let expected = FrameAnimator::new(BehaviorSet::default()).step(&mut tree, 3.5).to_vec();
        for (slot, m) in expected.iter().enumerate() {
            assert_eq!(d.renderer().matrix(slot), Some(*m));
        }
    }

    #[test]
    fn test_tick_refuses_mismatched_slot_count() {
        let mut d = driver(16);
        let catalog = GeometryCatalog::new(MeshParams::default());
        d.build(3, &catalog).unwrap();
        d.tick().unwrap();

        if let DriverState::Built { registered, .. } = &mut d.state {
            *registered += 1;
        }
        assert!(matches!(d.tick(), Err(TreeError::PreconditionViolated(_))));
        assert_eq!(d.renderer().submitted_frames(), 1);
        assert_eq!(d.frames(), 1);
    }
}

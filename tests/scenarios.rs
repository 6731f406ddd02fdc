//! End-to-end runs of build, registration and animation through the public API

use branch_fractal::{
    AnimationDriver, Behavior, BehaviorSet, FrameAnimator, GeometryCatalog, InstanceBuffer,
    ManualClock, Mat4, MeshParams, Renderer, TreeBuilder, TreeError, Vec3,
};

fn catalog() -> GeometryCatalog {
    GeometryCatalog::new(MeshParams::default())
}

#[test]
fn root_only_tree_renders_identity() {
    let mut tree = TreeBuilder::build(0).unwrap();
    assert_eq!(tree.node_count(), 1);

    let mut animator = FrameAnimator::new(BehaviorSet::default());
    assert_eq!(animator.step(&mut tree, 0.0), &[Mat4::IDENTITY]);
}

#[test]
fn depth_one_children_rest_pose() {
    let params = BehaviorSet::default();
    let mut tree = TreeBuilder::build(1).unwrap();
    FrameAnimator::new(params).step(&mut tree, 0.0);

    let nodes: Vec<_> = tree.iter().collect();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[1].behavior, Behavior::A);
    assert_eq!(nodes[1].local.rotation.z, params.a.base_angle);
    assert_eq!(nodes[1].local.scale, Vec3::splat(params.a.scale));
    assert_eq!(nodes[2].behavior, Behavior::B);
    assert_eq!(nodes[2].local.rotation.z, -params.b.base_angle);
    assert_eq!(nodes[2].local.scale, Vec3::splat(params.b.scale));
}

#[test]
fn depth_eleven_registers_4095_slots() {
    let mut driver = AnimationDriver::new(
        InstanceBuffer::new(4095),
        ManualClock::default(),
        BehaviorSet::default(),
    );
    assert_eq!(driver.build(11, &catalog()).unwrap(), 4095);

    let renderer = driver.renderer();
    assert_eq!(renderer.registered(), 4095);
    assert!((0..4095).all(|id| renderer.geometry(id).is_some()));

    driver.clock_mut().set(2.0);
    let report = driver.tick().unwrap();
    assert_eq!(report.instances, 4095);
    assert_eq!(driver.renderer().packed().len(), 4095 * 16);
}

#[test]
fn negative_depth_is_invalid() {
    assert!(matches!(TreeBuilder::build(-1), Err(TreeError::InvalidArgument(_))));
}

#[test]
fn many_frames_keep_shape() {
    let mut driver = AnimationDriver::new(
        InstanceBuffer::new(127),
        ManualClock::default(),
        BehaviorSet::default(),
    );
    driver.build(6, &catalog()).unwrap();

    for _ in 0..600 {
        driver.clock_mut().advance(1.0 / 60.0);
        driver.tick().unwrap();
    }

    let tree = driver.tree().unwrap();
    assert_eq!(tree.iter().count(), 127);
    assert_eq!(driver.renderer().submitted_frames(), 600);
    assert_eq!(driver.renderer().capacity(), 127);
}

//! Per-frame animation of the branch tree
//!
//! Slot behaviors give each branch its local transform from elapsed time,
//! the animator propagates world transforms from the root down, and the
//! driver feeds the result to the renderer once per frame.

mod animator;
mod behavior;
mod driver;

pub use animator::FrameAnimator;
pub use behavior::{Behavior, BehaviorParams, BehaviorSet};
pub use driver::{AnimationDriver, FrameReport};

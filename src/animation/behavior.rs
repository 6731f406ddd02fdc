//! Slot behaviors: pure functions from elapsed time to a local transform

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use crate::math::{Transform, Vec3};

/// Behavior attached to a node by the slot it occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Behavior {
    /// Root: keeps its construction transform
    #[default]
    None,
    /// A-slot child
    A,
    /// B-slot child
    B,
}

/// Shape of one slot behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorParams {
    /// Distance up the parent's axis where the child starts
    pub offset: f32,
    /// Resting tilt in radians; B mirrors it
    pub base_angle: f32,
    /// Sway amplitude in radians
    pub amplitude: f32,
    /// Sway angular frequency in radians per second
    pub frequency: f32,
    /// Fixed turn about the branch axis, so generations alternate planes
    pub twist: f32,
    /// Uniform scale relative to the parent, below 1 for taper
    pub scale: f32,
}

impl BehaviorParams {
    pub fn default_a() -> Self {
        Self {
            offset: 1.0,
            base_angle: 0.45,
            amplitude: 0.08,
            frequency: 1.1,
            twist: FRAC_PI_2,
            scale: 0.8,
        }
    }

    pub fn default_b() -> Self {
        Self {
            offset: 1.0,
            base_angle: 0.45,
            amplitude: 0.06,
            frequency: 0.7,
            twist: FRAC_PI_2,
            scale: 0.65,
        }
    }

    fn sway(&self, t: f64) -> f32 {
        self.amplitude * (f64::from(self.frequency) * t).sin() as f32
    }

    fn transform(&self, tilt: f32) -> Transform {
        Transform::new(
            Vec3::new(0.0, self.offset, 0.0),
            Vec3::new(0.0, self.twist, tilt),
            Vec3::splat(self.scale),
        )
    }
}

/// Parameters for both slots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSet {
    #[serde(default = "BehaviorParams::default_a")]
    pub a: BehaviorParams,
    #[serde(default = "BehaviorParams::default_b")]
    pub b: BehaviorParams,
}

impl Default for BehaviorSet {
    fn default() -> Self {
        Self {
            a: BehaviorParams::default_a(),
            b: BehaviorParams::default_b(),
        }
    }
}

impl Behavior {
    /// Local transform at `t` seconds, or `None` for the root.
    ///
    /// Depends on `t` and `params` only, so any frame can be replayed.
    pub fn evaluate(self, t: f64, params: &BehaviorSet) -> Option<Transform> {
        match self {
            Behavior::None => None,
            Behavior::A => {
                let a = &params.a;
                Some(a.transform(a.base_angle + a.sway(t)))
            }
            Behavior::B => {
                let b = &params.b;
                Some(b.transform(-b.base_angle + b.sway(t)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_root_has_no_transform() {
        assert_eq!(Behavior::None.evaluate(3.0, &BehaviorSet::default()), None);
    }

    #[test]
    fn test_rest_pose_at_time_zero() {
        let params = BehaviorSet::default();
        let a = Behavior::A.evaluate(0.0, &params).unwrap();
        let b = Behavior::B.evaluate(0.0, &params).unwrap();

        assert_eq!(a.rotation.z, params.a.base_angle);
        assert_eq!(a.scale, Vec3::splat(params.a.scale));
        assert_eq!(b.rotation.z, -params.b.base_angle);
        assert_eq!(b.scale, Vec3::splat(params.b.scale));
        assert_eq!(a.translation, b.translation);
    }

    #[test]
    fn test_b_shrinks_faster_than_a() {
        let params = BehaviorSet::default();
        assert!(params.b.scale < params.a.scale);
        assert!(params.a.scale < 1.0);
    }

    #[test]
    fn test_sway_stays_within_amplitude() {
        let params = BehaviorSet::default();
        for i in 0..200 {
            let t = i as f64 * 0.137;
            let a = Behavior::A.evaluate(t, &params).unwrap();
            let b = Behavior::B.evaluate(t, &params).unwrap();
            assert!((a.rotation.z - params.a.base_angle).abs() <= params.a.amplitude + 1e-6);
            assert!((b.rotation.z + params.b.base_angle).abs() <= params.b.amplitude + 1e-6);
        }
    }

    #[test]
    fn test_sway_follows_sine() {
        let params = BehaviorSet::default();
        let t = 0.5;
        let a = Behavior::A.evaluate(t, &params).unwrap();
        let expected = params.a.base_angle + params.a.amplitude * (params.a.frequency * 0.5).sin();
        assert_relative_eq!(a.rotation.z, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_same_time_same_transform() {
        let params = BehaviorSet::default();
        assert_eq!(
            Behavior::B.evaluate(12.25, &params),
            Behavior::B.evaluate(12.25, &params)
        );
    }

    #[test]
    fn test_negative_time_is_harmless() {
        let params = BehaviorSet::default();
        let a = Behavior::A.evaluate(-4.0, &params).unwrap();
        assert!(a.rotation.z.is_finite());
    }
}

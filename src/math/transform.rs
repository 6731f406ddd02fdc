use super::{Mat4, Vec3};

/// Translation, Euler rotation (XYZ order, radians) and non-uniform scale
/// relative to the parent's coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn new(translation: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self { translation, rotation, scale }
    }

    /// `T * R * S`: scale first, then rotate, then translate
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::translation(self.translation)
            .mul(&Mat4::rotation_euler_xyz(self.rotation))
            .mul(&Mat4::scale(self.scale))
    }
}

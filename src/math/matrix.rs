use super::Vec3;

/// 4x4 matrix, column-major so it can be handed to the renderer as-is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        data: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub fn translation(offset: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.data[12] = offset.x;
        m.data[13] = offset.y;
        m.data[14] = offset.z;
        m
    }

    pub fn scale(factors: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.data[0] = factors.x;
        m.data[5] = factors.y;
        m.data[10] = factors.z;
        m
    }

    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[5] = c;
        m.data[6] = s;
        m.data[9] = -s;
        m.data[10] = c;
        m
    }

    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[0] = c;
        m.data[2] = -s;
        m.data[8] = s;
        m.data[10] = c;
        m
    }

    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.data[0] = c;
        m.data[1] = s;
        m.data[4] = -s;
        m.data[5] = c;
        m
    }

    /// Rotation from Euler angles applied in XYZ order (`Rx * Ry * Rz`)
    pub fn rotation_euler_xyz(angles: Vec3) -> Self {
        Self::rotation_x(angles.x)
            .mul(&Self::rotation_y(angles.y))
            .mul(&Self::rotation_z(angles.z))
    }

    /// Perspective projection matrix (OpenGL clip space)
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self {
            data: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, (far + near) * nf, -1.0,
                0.0, 0.0, 2.0 * far * near * nf, 0.0,
            ],
        }
    }

    /// Look-at view matrix
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let r = f.cross(&up).normalize();
        let u = r.cross(&f);

        Self {
            data: [
                r.x, u.x, -f.x, 0.0,
                r.y, u.y, -f.y, 0.0,
                r.z, u.z, -f.z, 0.0,
                -r.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0,
            ],
        }
    }

    /// `self * other`: `other` is applied first
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for col in 0..4 {
            for row in 0..4 {
                result[row + col * 4] = (0..4)
                    .map(|k| self.data[row + k * 4] * other.data[k + col * 4])
                    .sum();
            }
        }

        Self { data: result }
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let d = &self.data;
        Vec3::new(
            d[0] * p.x + d[4] * p.y + d[8] * p.z + d[12],
            d[1] * p.x + d[5] * p.y + d[9] * p.z + d[13],
            d[2] * p.x + d[6] * p.y + d[10] * p.z + d[14],
        )
    }

    /// Translation column
    pub fn origin(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

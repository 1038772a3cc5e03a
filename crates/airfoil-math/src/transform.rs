use crate::{DMat4, DVec4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid body transform (rotation + translation, no shear/scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    /// Quarter turn about +Y taking `(x, y, z)` to `(z, y, -x)`.
    ///
    /// Forward along the chord becomes +Z while +Y stays up. The matrix is
    /// written out entry by entry so every output coordinate is an exact copy
    /// (or negation) of an input coordinate.
    pub fn z_forward() -> Self {
        Self::from_mat4(DMat4::from_cols(
            DVec4::new(0.0, 0.0, -1.0, 0.0),
            DVec4::new(0.0, 1.0, 0.0, 0.0),
            DVec4::new(1.0, 0.0, 0.0, 0.0),
            DVec4::W,
        ))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    /// Rotation-only transforms map normals the same way as directions.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }

    pub fn then(&self, other: &Transform) -> Transform {
        Self::from_mat4(other.to_mat4() * self.to_mat4())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

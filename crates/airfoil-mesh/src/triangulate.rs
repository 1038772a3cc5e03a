use airfoil_math::{Aabb3, Point3, Transform, Vector3};

/// Indexed triangle mesh with one normal per vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex indices of triangle `tri`.
    pub fn triangle(&self, tri: usize) -> [usize; 3] {
        let t = &self.indices[tri * 3..tri * 3 + 3];
        [t[0] as usize, t[1] as usize, t[2] as usize]
    }

    /// Unnormalized geometric normal of triangle `tri` from its winding.
    pub fn face_normal(&self, tri: usize) -> Vector3 {
        let [i0, i1, i2] = self.triangle(tri);
        let p0 = self.positions[i0];
        (self.positions[i1] - p0).cross(self.positions[i2] - p0)
    }

    /// Apply a rigid transform to every position and normal.
    pub fn transform(&mut self, transform: &Transform) {
        for p in &mut self.positions {
            *p = transform.transform_point(*p);
        }
        for n in &mut self.normals {
            *n = transform.transform_vector(*n);
        }
    }

    /// True when no position or normal holds a NaN or infinity.
    pub fn is_finite(&self) -> bool {
        self.positions.iter().chain(&self.normals).all(|v| v.is_finite())
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

use airfoil_math::Transform;

use crate::TriangleMesh;

/// Relabel axes so the chord runs along -Z (forward is +Z) and up stays +Y.
pub fn apply_z_forward(mesh: &mut TriangleMesh) {
    mesh.transform(&Transform::z_forward());
}

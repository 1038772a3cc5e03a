//! End-to-end build: request -> profile -> lofted, oriented triangle mesh.

use airfoil_core::{AirfoilError, Result, Tolerance, Validate};
use airfoil_math::Aabb3;
use airfoil_profile::{AirfoilRequest, NacaCode, Profile, Resolution};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::faces::face_indices;
use crate::loft::vertex_locations;
use crate::normals::vertex_normals;
use crate::orient::apply_z_forward;
use crate::{RingLayout, TriangleMesh};

/// Build the prism mesh described by `request`.
pub fn build_mesh(request: &AirfoilRequest) -> Result<TriangleMesh> {
    let _span = info_span!("build_mesh", code = %request.code, resolution = %request.resolution)
        .entered();
    request.validate()?;

    let profile = Profile::generate(request);
    let layout = RingLayout::new(profile.len());
    let positions = vertex_locations(&profile);
    let normals = vertex_normals(&positions, layout, Tolerance::default());
    let indices = face_indices(layout);

    let mut mesh = TriangleMesh {
        positions,
        normals,
        indices,
    };
    if request.options.z_forward {
        apply_z_forward(&mut mesh);
    }

    if !mesh.is_finite() {
        return Err(AirfoilError::Geometry(format!(
            "NACA {} produced non-finite vertex data",
            request.code
        )));
    }

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        z_forward = request.options.z_forward,
        "built airfoil mesh"
    );
    Ok(mesh)
}

/// Short description of a built mesh, printed by the CLI on request.
#[derive(Debug, Clone, Serialize)]
pub struct MeshSummary {
    pub code: NacaCode,
    pub resolution: Resolution,
    pub vertices: usize,
    pub triangles: usize,
    pub bounds: Aabb3,
}

impl MeshSummary {
    pub fn new(request: &AirfoilRequest, mesh: &TriangleMesh) -> Self {
        Self {
            code: request.code,
            resolution: request.resolution,
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            bounds: mesh.bounding_box(),
        }
    }
}

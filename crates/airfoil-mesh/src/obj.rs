//! Wavefront OBJ output.
//!
//! Vertices and normals share one index space, so every face corner is
//! written as `k//k`. Coordinates are narrowed to `f32` and printed with the
//! shortest text that parses back to the same `f32`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use airfoil_core::Result;
use tracing::info;

use crate::TriangleMesh;

/// Write `mesh` as OBJ text: all `v` lines, then `vn` lines, then `f` lines.
pub fn write_obj<W: Write>(mesh: &TriangleMesh, mut out: W) -> io::Result<()> {
    for p in &mesh.positions {
        writeln!(out, "v {} {} {}", p.x as f32, p.y as f32, p.z as f32)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x as f32, n.y as f32, n.z as f32)?;
    }
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    out.flush()
}

/// Create (or truncate) `path` and write `mesh` to it.
pub fn save_obj(mesh: &TriangleMesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_obj(mesh, BufWriter::new(file))?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "wrote OBJ mesh"
    );
    Ok(())
}

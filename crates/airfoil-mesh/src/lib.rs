pub mod faces;
pub mod layout;
pub mod loft;
pub mod normals;
pub mod obj;
pub mod orient;
pub mod pipeline;
pub mod triangulate;

pub use layout::RingLayout;
pub use obj::{save_obj, write_obj};
pub use pipeline::{build_mesh, MeshSummary};
pub use triangulate::TriangleMesh;

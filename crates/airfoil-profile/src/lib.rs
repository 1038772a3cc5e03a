//! NACA 4-digit airfoil sections: request types and the sampled 2D profile.

pub mod formula;
pub mod naca;
pub mod profile;
pub mod request;

pub use naca::NacaCode;
pub use profile::Profile;
pub use request::{AirfoilRequest, MeshOptions, Resolution, Spacing};

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{AirfoilError, Result};
pub use tolerance::Tolerance;
pub use traits::Validate;

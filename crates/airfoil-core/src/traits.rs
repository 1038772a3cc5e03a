use crate::error::Result;

/// Validate a value before it is handed to the geometry pipeline.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

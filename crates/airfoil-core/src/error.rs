use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirfoilError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid NACA: {0}")]
    InvalidCode(String),

    #[error("{0}")]
    InvalidResolution(String),

    #[error("{0}")]
    Unsupported(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AirfoilError {
    /// True for errors raised while checking user input, before any geometry is built.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AirfoilError::InvalidCode(_)
                | AirfoilError::InvalidResolution(_)
                | AirfoilError::Unsupported(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AirfoilError>;

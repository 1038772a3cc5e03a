//! Immutable description of one airfoil mesh to build.

use std::fmt;
use std::str::FromStr;

use airfoil_core::{AirfoilError, Result, Validate};
use serde::{Deserialize, Serialize};

use crate::NacaCode;

/// Number of stations sampled along the chord, in `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Resolution(u32);

impl Resolution {
    pub const MIN: u32 = 3;
    pub const MAX: u32 = 1000;

    pub fn new(n: u32) -> Result<Self> {
        if n < Self::MIN {
            Err(AirfoilError::InvalidResolution(format!(
                "x resolution must be at least {}",
                Self::MIN
            )))
        } else if n > Self::MAX {
            Err(AirfoilError::InvalidResolution(format!(
                "x resolution may not be greater than {}",
                Self::MAX
            )))
        } else {
            Ok(Self(n))
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl FromStr for Resolution {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self> {
        let n: i64 = s
            .parse()
            .map_err(|_| AirfoilError::InvalidResolution("Invalid x resolution".to_string()))?;
        // Clamp before narrowing so huge values still report the range error.
        Self::new(n.clamp(0, i64::from(u32::MAX)) as u32)
    }
}

impl TryFrom<u32> for Resolution {
    type Error = AirfoilError;

    fn try_from(n: u32) -> Result<Self> {
        Self::new(n)
    }
}

impl From<Resolution> for u32 {
    fn from(r: Resolution) -> Self {
        r.0
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distribution of stations along the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    /// `x = u`
    Linear,
    /// `x = u²`, concentrating stations near the leading edge.
    #[default]
    FrontLoaded,
}

impl Spacing {
    pub fn apply(self, u: f64) -> f64 {
        match self {
            Spacing::Linear => u,
            Spacing::FrontLoaded => u * u,
        }
    }

    /// Chord position of station `i` out of `n`. Exactly 0 at `i = 0` and 1 at `i = n - 1`.
    pub fn station(self, i: usize, n: usize) -> f64 {
        self.apply(i as f64 / (n - 1) as f64)
    }
}

/// Per-run mesh options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshOptions {
    pub spacing: Spacing,
    /// Rotate the finished mesh so forward is +Z and up is +Y.
    pub z_forward: bool,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            spacing: Spacing::FrontLoaded,
            z_forward: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirfoilRequest {
    pub code: NacaCode,
    pub resolution: Resolution,
    #[serde(default)]
    pub options: MeshOptions,
}

impl AirfoilRequest {
    pub fn new(code: NacaCode, resolution: Resolution) -> Self {
        Self {
            code,
            resolution,
            options: MeshOptions::default(),
        }
    }

    pub fn with_options(self, options: MeshOptions) -> Self {
        Self { options, ..self }
    }

    /// Parse the two textual inputs the command line takes.
    pub fn parse(code: &str, resolution: &str) -> Result<Self> {
        let request = Self::new(code.parse()?, resolution.parse()?);
        request.validate()?;
        Ok(request)
    }
}

impl Validate for AirfoilRequest {
    fn validate(&self) -> Result<()> {
        if cfg!(feature = "symmetric-only") && !self.code.is_symmetric() {
            return Err(AirfoilError::Unsupported(
                "Only symmetric NACA are supported at this time".to_string(),
            ));
        }
        // The forward camber branch divides by p²; a cambered section needs p > 0.
        if self.code.max_camber() > 0.0 && self.code.camber_position() == 0.0 {
            return Err(AirfoilError::Unsupported(format!(
                "NACA {}: camber position must be non-zero for a cambered section",
                self.code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(s: &str) -> Result<Resolution> {
        s.parse()
    }

    #[test]
    fn test_resolution_bounds() {
        assert_eq!(res("3").unwrap().get(), 3);
        assert_eq!(res("1000").unwrap().get(), 1000);
        assert!(res("2").is_err());
        assert!(res("1001").is_err());
        assert!(res("2000").is_err());
        assert!(res("-5").is_err());
        assert!(res("99999999999999").is_err());
    }

    #[test]
    fn test_resolution_messages() {
        assert_eq!(res("abc").unwrap_err().to_string(), "Invalid x resolution");
        assert_eq!(res("2").unwrap_err().to_string(), "x resolution must be at least 3");
        assert_eq!(
            res("2000").unwrap_err().to_string(),
            "x resolution may not be greater than 1000"
        );
    }

    #[test]
    fn test_resolution_rejects_trailing_junk() {
        assert!(res("12abc").is_err());
        assert!(res("").is_err());
        assert!(res("1.5").is_err());
    }

    #[test]
    fn test_spacing_endpoints() {
        for spacing in [Spacing::Linear, Spacing::FrontLoaded] {
            for n in [3, 7, 1000] {
                assert_eq!(spacing.station(0, n), 0.0);
                assert_eq!(spacing.station(n - 1, n), 1.0);
            }
        }
    }

    #[test]
    fn test_front_loaded_squares() {
        assert_eq!(Spacing::FrontLoaded.station(1, 3), 0.25);
        assert_eq!(Spacing::Linear.station(1, 3), 0.5);
    }

    #[test]
    fn test_default_options() {
        let opts = MeshOptions::default();
        assert_eq!(opts.spacing, Spacing::FrontLoaded);
        assert!(opts.z_forward);
    }

    #[test]
    fn test_parse_request() {
        let req = AirfoilRequest::parse("0012", "50").unwrap();
        assert_eq!(req.code.to_string(), "0012");
        assert_eq!(req.resolution.get(), 50);
        assert_eq!(req.options, MeshOptions::default());
    }

    #[test]
    fn test_reject_camber_without_position() {
        let err = AirfoilRequest::parse("2012", "10").unwrap_err();
        assert!(matches!(err, AirfoilError::Unsupported(_)));
    }

    #[cfg(not(feature = "symmetric-only"))]
    #[test]
    fn test_accept_cambered() {
        assert!(AirfoilRequest::parse("2412", "10").is_ok());
        assert!(AirfoilRequest::parse("0412", "10").is_ok());
    }

    #[cfg(feature = "symmetric-only")]
    #[test]
    fn test_symmetric_only_rejects_cambered() {
        let err = AirfoilRequest::parse("2412", "10").unwrap_err();
        assert_eq!(err.to_string(), "Only symmetric NACA are supported at this time");
        assert!(AirfoilRequest::parse("0012", "10").is_ok());
    }

    #[test]
    fn test_request_from_json() {
        let req: AirfoilRequest = serde_json::from_str(
            r#"{"code":"0015","resolution":40,"options":{"spacing":"linear"}}"#,
        )
        .unwrap();
        assert_eq!(req.resolution.get(), 40);
        assert_eq!(req.options.spacing, Spacing::Linear);
        assert!(req.options.z_forward);
        assert!(serde_json::from_str::<AirfoilRequest>(r#"{"code":"0015","resolution":2}"#).is_err());
    }
}

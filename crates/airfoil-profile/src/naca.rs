//! NACA 4-digit designation.

use std::fmt;
use std::str::FromStr;

use airfoil_core::AirfoilError;
use serde::{Deserialize, Serialize};

/// A NACA 4-digit code such as `0012` or `2412`.
///
/// Digit 0 is the maximum camber in percent of chord, digit 1 the position of
/// maximum camber in tenths of chord, and digits 2-3 the maximum thickness in
/// percent of chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NacaCode {
    digits: [u8; 4],
}

impl NacaCode {
    pub fn from_digits(digits: [u8; 4]) -> Option<Self> {
        digits.iter().all(|&d| d <= 9).then_some(Self { digits })
    }

    pub fn digits(&self) -> [u8; 4] {
        self.digits
    }

    /// Maximum camber `m` as a fraction of chord.
    pub fn max_camber(&self) -> f64 {
        f64::from(self.digits[0]) / 100.0
    }

    /// Chordwise position `p` of maximum camber as a fraction of chord.
    pub fn camber_position(&self) -> f64 {
        f64::from(self.digits[1]) / 10.0
    }

    /// Maximum thickness `t` as a fraction of chord.
    pub fn thickness(&self) -> f64 {
        f64::from(self.digits[2] * 10 + self.digits[3]) / 100.0
    }

    pub fn is_symmetric(&self) -> bool {
        self.digits[0] == 0 && self.digits[1] == 0
    }
}

impl FromStr for NacaCode {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(AirfoilError::InvalidCode(s.to_string()));
        }
        let mut digits = [0u8; 4];
        for (d, b) in digits.iter_mut().zip(bytes) {
            *d = b - b'0';
        }
        Ok(Self { digits })
    }
}

impl TryFrom<String> for NacaCode {
    type Error = AirfoilError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NacaCode> for String {
    fn from(code: NacaCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for NacaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

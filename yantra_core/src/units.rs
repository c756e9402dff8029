//! # Angle Types
//!
//! Lightweight wrappers for the two angle units the engine works in. Result
//! records expose plain `f64` fields with a `_deg` suffix so JSON stays flat;
//! these newtypes are used inside the derivations, where mixing degrees and
//! radians is the classic bug.
//!
//! Lengths carry no unit type: every length is in whatever unit the caller
//! chose for the scale factor R.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::units::{Degrees, Dms, Radians};
//!
//! let latitude = Degrees(28.6);
//! let rad: Radians = latitude.into();
//! assert!((rad.sin() - 0.4787).abs() < 1e-4);
//!
//! assert_eq!(Dms::from_degrees(28.6).to_string(), "28° 36' 0.00\"");
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Angle in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// Wrap into [0°, 360°).
    pub fn normalized(self) -> Self {
        let r = self.0.rem_euclid(360.0);
        // rem_euclid can round up to 360 for tiny negative inputs; +0.0 clears a negative zero
        if r >= 360.0 {
            Degrees(0.0)
        } else {
            Degrees(r + 0.0)
        }
    }

    /// 90° minus this angle.
    pub fn complement(self) -> Self {
        Degrees(90.0 - self.0)
    }

    pub fn to_radians(self) -> Radians {
        self.into()
    }
}

impl Radians {
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    pub fn to_degrees(self) -> Degrees {
        self.into()
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);

/// Degrees, arc-minutes and arc-seconds, for marking-out tables.
///
/// Seconds are rounded to hundredths with carry, so `59.999"` prints as the
/// next whole minute rather than `60.00"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    pub fn from_degrees(value: f64) -> Self {
        let centiseconds = (value.abs() * 360_000.0).round() as u64;
        let degrees = (centiseconds / 360_000) as u32;
        let minutes = ((centiseconds % 360_000) / 6_000) as u32;
        let seconds = (centiseconds % 6_000) as f64 / 100.0;
        Dms {
            negative: value < 0.0 && centiseconds > 0,
            degrees,
            minutes,
            seconds,
        }
    }
}

impl From<Degrees> for Dms {
    fn from(deg: Degrees) -> Self {
        Dms::from_degrees(deg.0)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{}{}° {}' {:.2}\"", sign, self.degrees, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Degrees(-15.0).normalized(), Degrees(345.0));
        assert_eq!(Degrees(360.0).normalized(), Degrees(0.0));
        assert_eq!(Degrees(375.0).normalized(), Degrees(15.0));
        let zero = Degrees(-0.0).normalized();
        assert!(zero.0.is_sign_positive());
        assert!(Degrees(-1e-20).normalized().0 < 360.0);
    }

    #[test]
    fn test_complement() {
        assert!((Degrees(28.6).complement().0 - 61.4).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Degrees(10.0);
        let b = Degrees(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
        assert_eq!((-a).0, -10.0);
    }

    #[test]
    fn test_dms_display() {
        assert_eq!(Dms::from_degrees(26.9167).to_string(), "26° 55' 0.12\"");
        assert_eq!(Dms::from_degrees(-23.44).to_string(), "-23° 26' 24.00\"");
    }

    #[test]
    fn test_dms_carries_rounded_seconds() {
        // 10° 59' 59.999" rounds up to 11° 0' 0.00"
        let value = 10.0 + 59.0 / 60.0 + 59.999 / 3600.0;
        assert_eq!(Dms::from_degrees(value).to_string(), "11° 0' 0.00\"");
    }

    #[test]
    fn test_serialization() {
        let deg = Degrees(61.4);
        let json = serde_json::to_string(&deg).unwrap();
        assert_eq!(json, "61.4");
    }
}

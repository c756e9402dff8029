//! # Input Validation
//!
//! The single gate between raw user numbers and the derivations. Every
//! instrument module takes an [`ObservationParameters`], which can only be
//! built here, so the modules never re-check their inputs.
//!
//! Latitude must lie strictly between 0° and 90°: at the equator sin φ = 0
//! and the Samrat hypotenuse diverges; at the pole tan φ diverges.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::validation::validate;
//!
//! let params = validate(28.6, 1.0).unwrap();
//! assert_eq!(params.latitude_deg(), 28.6);
//!
//! assert!(validate(90.0, 1.0).is_err());
//! assert!(validate(28.6, 0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{YantraError, YantraResult};
use crate::units::{Degrees, Radians};

/// Raw, unchecked observation input as it arrives from a form or JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationInput {
    /// Observer latitude, decimal degrees north
    pub latitude_deg: f64,

    /// Linear scale factor R
    pub scale: f64,
}

/// Validated observation parameters.
///
/// Fields are private: the only ways in are [`validate`] and
/// `TryFrom<ObservationInput>` (which deserialization also goes through).
///
/// ## JSON Example
///
/// ```json
/// { "latitude_deg": 28.6, "scale": 1.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ObservationInput", into = "ObservationInput")]
pub struct ObservationParameters {
    latitude_deg: f64,
    scale: f64,
}

impl ObservationParameters {
    /// Observer latitude φ in degrees, within (0, 90)
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Latitude as a typed angle
    pub fn latitude(&self) -> Degrees {
        Degrees(self.latitude_deg)
    }

    pub fn latitude_rad(&self) -> Radians {
        self.latitude().to_radians()
    }

    /// Scale factor R, strictly positive and finite
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Same latitude, different scale.
    pub fn with_scale(&self, scale: f64) -> YantraResult<Self> {
        validate(self.latitude_deg, scale)
    }
}

impl TryFrom<ObservationInput> for ObservationParameters {
    type Error = YantraError;

    fn try_from(input: ObservationInput) -> YantraResult<Self> {
        validate(input.latitude_deg, input.scale)
    }
}

impl From<ObservationParameters> for ObservationInput {
    fn from(params: ObservationParameters) -> Self {
        ObservationInput {
            latitude_deg: params.latitude_deg,
            scale: params.scale,
        }
    }
}

/// Validate a latitude/scale pair.
///
/// # Returns
///
/// * `Ok(ObservationParameters)` - both values in range
/// * `Err(YantraError::OutOfRangeLatitude)` - latitude ≤ 0, ≥ 90, or NaN
/// * `Err(YantraError::NonPositiveScale)` - scale ≤ 0, NaN, or infinite
///
/// Latitude is checked first.
pub fn validate(latitude_deg: f64, scale: f64) -> YantraResult<ObservationParameters> {
    // Written as a positive test so NaN falls through to the error
    if !(latitude_deg > 0.0 && latitude_deg < 90.0) {
        return Err(YantraError::out_of_range_latitude(latitude_deg));
    }
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(YantraError::non_positive_scale(scale));
    }
    Ok(ObservationParameters { latitude_deg, scale })
}

/// Validate a longitude in decimal degrees east, within [-180, 180].
pub fn validate_longitude(longitude_deg: f64) -> YantraResult<f64> {
    if longitude_deg.is_finite() && longitude_deg.abs() <= 180.0 {
        Ok(longitude_deg)
    } else {
        Err(YantraError::out_of_range_longitude(longitude_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_typical_site() {
        let params = validate(26.9167, 10.0).unwrap();
        assert_eq!(params.latitude_deg(), 26.9167);
        assert_eq!(params.scale(), 10.0);
    }

    #[test]
    fn test_boundaries() {
        assert!(validate(0.0001, 1.0).is_ok());
        assert!(validate(89.9999, 1.0).is_ok());
        assert!(matches!(validate(0.0, 1.0), Err(YantraError::OutOfRangeLatitude { .. })));
        assert!(matches!(validate(90.0, 1.0), Err(YantraError::OutOfRangeLatitude { .. })));
        assert!(matches!(validate(-10.0, 1.0), Err(YantraError::OutOfRangeLatitude { .. })));
    }

    #[test]
    fn test_nan_latitude() {
        assert!(matches!(validate(f64::NAN, 1.0), Err(YantraError::OutOfRangeLatitude { .. })));
    }

    #[test]
    fn test_bad_scale() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(validate(45.0, scale), Err(YantraError::NonPositiveScale { .. })),
                "scale {} should be rejected",
                scale
            );
        }
    }

    #[test]
    fn test_latitude_reported_before_scale() {
        let err = validate(95.0, -1.0).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE_LATITUDE");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ObservationParameters = serde_json::from_str(r#"{"latitude_deg": 28.6, "scale": 1.0}"#).unwrap();
        assert_eq!(ok.latitude_deg(), 28.6);

        let bad: Result<ObservationParameters, _> = serde_json::from_str(r#"{"latitude_deg": 90.0, "scale": 1.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialization_shape() {
        let params = validate(28.6, 2.0).unwrap();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"latitude_deg":28.6,"scale":2.0}"#);
    }

    #[test]
    fn test_longitude() {
        assert_eq!(validate_longitude(75.8167).unwrap(), 75.8167);
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.5).is_err());
        assert!(validate_longitude(f64::NAN).is_err());
    }
}

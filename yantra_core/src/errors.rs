//! # Error Types
//!
//! Structured error types for yantra_core. Input errors carry the offending
//! value so a caller can show it back to the user verbatim; geometry errors
//! name the instrument and the quantity that went non-finite.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::errors::{YantraError, YantraResult};
//!
//! fn check_scale(scale: f64) -> YantraResult<()> {
//!     if !(scale > 0.0) {
//!         return Err(YantraError::non_positive_scale(scale));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_scale(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for yantra_core operations
pub type YantraResult<T> = Result<T, YantraError>;

/// Structured error type for engine operations.
///
/// Values are stored as strings so that NaN and infinite inputs survive a
/// JSON round trip.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum YantraError {
    /// Latitude outside the open interval (0°, 90°)
    #[error("Latitude out of range: {value}° - must satisfy 0° < latitude < 90°")]
    OutOfRangeLatitude { value: String },

    /// Scale factor is zero, negative, or not a finite number
    #[error("Scale must be a positive finite number, got {value}")]
    NonPositiveScale { value: String },

    /// Longitude outside [-180°, 180°]
    #[error("Longitude out of range: {value}° - must lie within [-180°, 180°]")]
    OutOfRangeLongitude { value: String },

    /// A derived quantity came out NaN, infinite, or non-positive
    #[error("Degenerate geometry: {instrument} {quantity} - {reason}")]
    DegenerateGeometry {
        instrument: String,
        quantity: String,
        reason: String,
    },

    /// An engine configuration value is unusable
    #[error("Invalid config for '{field}': {value} - {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl YantraError {
    /// Create an OutOfRangeLatitude error
    pub fn out_of_range_latitude(value: f64) -> Self {
        YantraError::OutOfRangeLatitude {
            value: value.to_string(),
        }
    }

    /// Create a NonPositiveScale error
    pub fn non_positive_scale(value: f64) -> Self {
        YantraError::NonPositiveScale {
            value: value.to_string(),
        }
    }

    /// Create an OutOfRangeLongitude error
    pub fn out_of_range_longitude(value: f64) -> Self {
        YantraError::OutOfRangeLongitude {
            value: value.to_string(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(
        instrument: impl Into<String>,
        quantity: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        YantraError::DegenerateGeometry {
            instrument: instrument.into(),
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        YantraError::InvalidConfig {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        YantraError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        YantraError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Input errors the user can correct and resubmit.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            YantraError::OutOfRangeLatitude { .. }
                | YantraError::NonPositiveScale { .. }
                | YantraError::OutOfRangeLongitude { .. }
                | YantraError::InvalidConfig { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            YantraError::OutOfRangeLatitude { .. } => "OUT_OF_RANGE_LATITUDE",
            YantraError::NonPositiveScale { .. } => "NON_POSITIVE_SCALE",
            YantraError::OutOfRangeLongitude { .. } => "OUT_OF_RANGE_LONGITUDE",
            YantraError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            YantraError::InvalidConfig { .. } => "INVALID_CONFIG",
            YantraError::FileError { .. } => "FILE_ERROR",
            YantraError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = YantraError::out_of_range_latitude(90.0);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("OutOfRangeLatitude"));
        let roundtrip: YantraError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_nan_value_survives_json() {
        let error = YantraError::non_positive_scale(f64::NAN);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("NaN"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(YantraError::non_positive_scale(0.0).error_code(), "NON_POSITIVE_SCALE");
        assert_eq!(
            YantraError::degenerate_geometry("Samrat", "hypotenuse_length", "inf").error_code(),
            "DEGENERATE_GEOMETRY"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(YantraError::out_of_range_latitude(0.0).is_recoverable());
        assert!(!YantraError::degenerate_geometry("Rama", "pillar_height", "NaN").is_recoverable());
        assert!(!YantraError::serialization("bad json").is_recoverable());
    }

    #[test]
    fn test_display_is_human_readable() {
        let msg = YantraError::out_of_range_latitude(0.0).to_string();
        assert!(msg.contains("0° < latitude < 90°"), "{}", msg);
    }
}

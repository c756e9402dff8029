//! # Engine Configuration
//!
//! `EngineConfig` gathers every tunable the derivations read: astronomical
//! constants, graduation spacings, and the demo defaults the shell offers at
//! its prompts. It is passed explicitly into each entry point; nothing in the
//! engine reads global state.
//!
//! Config files are plain JSON. Missing fields fall back to [`Default`], so a
//! file containing only `{"digamsa_azimuth_step_deg": 1.0}` is valid.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::config::EngineConfig;
//!
//! let config: EngineConfig = serde_json::from_str(r#"{"rama_azimuth_step_deg": 15.0}"#).unwrap();
//! assert_eq!(config.rama_azimuth_step_deg, 15.0);
//! assert_eq!(config.obliquity_deg, 23.44);
//! config.validate().unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{YantraError, YantraResult};

/// Obliquity of the ecliptic ε in degrees
pub const OBLIQUITY_ECLIPTIC_DEG: f64 = 23.44;

/// Indian Standard Time reference meridian, 82° 30' E
pub const IST_REFERENCE_MERIDIAN_DEG: f64 = 82.5;

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Obliquity of the ecliptic ε (degrees), used for the solstice marks
    /// and the Samrat declination scale
    pub obliquity_deg: f64,

    /// Longitude of the standard-time meridian (degrees east)
    pub reference_meridian_deg: f64,

    /// Spacing of the Samrat gnomon declination scale (degrees)
    pub samrat_declination_step_deg: f64,

    /// Spacing of the Dakshinottara Bhitti zenith-distance scale (degrees)
    pub bhitti_graduation_step_deg: f64,

    /// Angular width of one Rama Yantra sector (degrees)
    pub rama_azimuth_step_deg: f64,

    /// Spacing of the Rama Yantra altitude scale (degrees)
    pub rama_altitude_step_deg: f64,

    /// Spacing of the Digamsa azimuth circle (degrees)
    pub digamsa_azimuth_step_deg: f64,

    /// Values the shell offers when the user does not supply them
    pub defaults: SiteDefaults,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            obliquity_deg: OBLIQUITY_ECLIPTIC_DEG,
            reference_meridian_deg: IST_REFERENCE_MERIDIAN_DEG,
            samrat_declination_step_deg: 5.0,
            bhitti_graduation_step_deg: 1.0,
            rama_azimuth_step_deg: 30.0,
            rama_altitude_step_deg: 5.0,
            digamsa_azimuth_step_deg: 5.0,
            defaults: SiteDefaults::default(),
        }
    }
}

impl EngineConfig {
    /// Check every field is usable by the derivations.
    pub fn validate(&self) -> YantraResult<()> {
        check_open_range("obliquity_deg", self.obliquity_deg, 0.0, 90.0)?;
        if !(self.reference_meridian_deg.is_finite() && self.reference_meridian_deg.abs() <= 180.0) {
            return Err(YantraError::invalid_config(
                "reference_meridian_deg",
                self.reference_meridian_deg.to_string(),
                "Meridian must lie within [-180, 180]",
            ));
        }
        check_step("samrat_declination_step_deg", self.samrat_declination_step_deg, 90.0)?;
        check_step("bhitti_graduation_step_deg", self.bhitti_graduation_step_deg, 90.0)?;
        check_circle_step("rama_azimuth_step_deg", self.rama_azimuth_step_deg)?;
        check_step("rama_altitude_step_deg", self.rama_altitude_step_deg, 90.0)?;
        check_circle_step("digamsa_azimuth_step_deg", self.digamsa_azimuth_step_deg)?;
        Ok(())
    }
}

fn check_open_range(field: &str, value: f64, min: f64, max: f64) -> YantraResult<()> {
    if value > min && value < max {
        Ok(())
    } else {
        Err(YantraError::invalid_config(
            field,
            value.to_string(),
            format!("Value must lie strictly between {} and {}", min, max),
        ))
    }
}

fn check_step(field: &str, value: f64, span: f64) -> YantraResult<()> {
    if value >= MIN_STEP_DEG && value <= span {
        Ok(())
    } else {
        Err(YantraError::invalid_config(
            field,
            value.to_string(),
            format!("Step must be between one arc-minute and {} degrees", span),
        ))
    }
}

/// Azimuth steps must close the circle: every sector is the same width.
fn check_circle_step(field: &str, value: f64) -> YantraResult<()> {
    check_step(field, value, 360.0)?;
    let sectors = (360.0 / value).round();
    if (sectors * value - 360.0).abs() > 1e-9 {
        return Err(YantraError::invalid_config(
            field,
            value.to_string(),
            "Step must divide 360 degrees evenly",
        ));
    }
    Ok(())
}

/// Smallest graduation step accepted (one arc-minute)
pub const MIN_STEP_DEG: f64 = 1.0 / 60.0;

/// Demo defaults for the presentation shell.
///
/// Jaipur (Jantar Mantar) coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefaults {
    /// Latitude, degrees north
    pub latitude_deg: f64,

    /// Longitude, degrees east
    pub longitude_deg: f64,

    /// Scale factor R, in the caller's linear unit
    pub scale: f64,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        SiteDefaults {
            latitude_deg: 26.9167,
            longitude_deg: 75.8167,
            scale: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"defaults": {"scale": 3.0}}"#).unwrap();
        assert_eq!(config.defaults.scale, 3.0);
        assert_eq!(config.defaults.latitude_deg, 26.9167);
        assert_eq!(config.bhitti_graduation_step_deg, 1.0);
    }

    #[test]
    fn test_rejects_zero_step() {
        let config = EngineConfig {
            digamsa_azimuth_step_deg: 0.0,
            ..EngineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
        assert!(err.to_string().contains("digamsa_azimuth_step_deg"));
    }

    #[test]
    fn test_rejects_nan_obliquity() {
        let config = EngineConfig {
            obliquity_deg: f64::NAN,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_step() {
        let config = EngineConfig {
            bhitti_graduation_step_deg: 91.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_azimuth_step_leaving_short_sector() {
        // 360 / 7 leaves a 3° sector at the end
        let config = EngineConfig {
            rama_azimuth_step_deg: 7.0,
            ..EngineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rama_azimuth_step_deg"));

        let config = EngineConfig {
            digamsa_azimuth_step_deg: 7.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_azimuth_steps_dividing_circle() {
        for step in [MIN_STEP_DEG, 0.5, 1.0, 7.5, 15.0, 24.0, 45.0, 360.0] {
            let config = EngineConfig {
                rama_azimuth_step_deg: step,
                digamsa_azimuth_step_deg: step,
                ..EngineConfig::default()
            };
            assert!(config.validate().is_ok(), "step {}", step);
        }
    }

    #[test]
    fn test_rejects_meridian_out_of_range() {
        let config = EngineConfig {
            reference_meridian_deg: 200.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

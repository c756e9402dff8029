//! # Site Calibration
//!
//! Numbers a builder needs alongside the instrument dimensions: the constant
//! offset between local mean time (what the sundials show) and the standard
//! time zone, the equation-of-time key points, and a few latitude constants
//! used when laying out the site.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::calibration::{compute_time_calibration, ClockDirection};
//! use yantra_core::config::EngineConfig;
//!
//! // Jaipur is 6.68° west of the IST meridian: sundials run ~26.7 min behind
//! let cal = compute_time_calibration(75.8167, &EngineConfig::default()).unwrap();
//! assert_eq!(cal.clock_offset.direction, ClockDirection::Behind);
//! assert_eq!(cal.clock_offset.to_string(), "00h 26m 43s behind standard time");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::equations::tangent_distance;
use crate::errors::YantraResult;
use crate::instruments::check_lengths;
use crate::validation::{validate_longitude, ObservationParameters};

/// Minutes of time per degree of longitude
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Equation of time at its turning points (sundial minus clock, minutes).
pub const EQUATION_OF_TIME_KEY_POINTS: [(&str, f64); 3] = [
    ("Feb 11", -14.2),
    ("May 14", 3.8),
    ("Nov 03", 16.4),
];

/// Local mean time versus standard time for one longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeCalibration {
    /// Site longitude, degrees east
    pub longitude_deg: f64,

    /// Standard-time meridian the offset is measured against
    pub reference_meridian_deg: f64,

    /// Local mean time minus standard time, in minutes
    pub offset_minutes: f64,

    /// `offset_minutes` split for display
    pub clock_offset: ClockOffset,

    /// Daily correction key points
    pub equation_of_time: Vec<EquationOfTimePoint>,
}

/// Whether local mean time runs ahead of or behind standard time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockDirection {
    Ahead,
    Behind,
    Synchronized,
}

/// An unsigned hours/minutes/seconds offset plus its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockOffset {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub direction: ClockDirection,
}

impl ClockOffset {
    /// Split a signed offset in minutes. Seconds are truncated.
    pub fn from_minutes(offset_minutes: f64) -> Self {
        let total_seconds = (offset_minutes.abs() * 60.0) as u64;
        let direction = if offset_minutes > 0.0 {
            ClockDirection::Ahead
        } else if offset_minutes < 0.0 {
            ClockDirection::Behind
        } else {
            ClockDirection::Synchronized
        };
        ClockOffset {
            hours: (total_seconds / 3600) as u32,
            minutes: ((total_seconds % 3600) / 60) as u32,
            seconds: (total_seconds % 60) as u32,
            direction,
        }
    }
}

impl fmt::Display for ClockOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.direction {
            ClockDirection::Ahead => "ahead of",
            ClockDirection::Behind => "behind",
            ClockDirection::Synchronized => "in step with",
        };
        write!(
            f,
            "{:02}h {:02}m {:02}s {} standard time",
            self.hours, self.minutes, self.seconds, relation
        )
    }
}

/// One point of the equation-of-time table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationOfTimePoint {
    pub date: String,
    pub minutes: f64,
}

/// Compute the sundial-to-clock correction for a longitude.
///
/// # Returns
///
/// * `Ok(TimeCalibration)` - Offset and equation-of-time table
/// * `Err(YantraError::OutOfRangeLongitude)` - longitude outside [-180, 180]
/// * `Err(YantraError::InvalidConfig)` - unusable reference meridian or other config value
pub fn compute_time_calibration(longitude_deg: f64, config: &EngineConfig) -> YantraResult<TimeCalibration> {
    let longitude_deg = validate_longitude(longitude_deg)?;
    config.validate()?;
    let offset_minutes = (longitude_deg - config.reference_meridian_deg) * MINUTES_PER_DEGREE;

    Ok(TimeCalibration {
        longitude_deg,
        reference_meridian_deg: config.reference_meridian_deg,
        offset_minutes,
        clock_offset: ClockOffset::from_minutes(offset_minutes),
        equation_of_time: EQUATION_OF_TIME_KEY_POINTS
            .iter()
            .map(|&(date, minutes)| EquationOfTimePoint {
                date: date.to_string(),
                minutes,
            })
            .collect(),
    })
}

/// Latitude constants for laying out the site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConstants {
    /// 90° − latitude
    pub colatitude_deg: f64,

    /// Altitude of the celestial pole (= latitude)
    pub pole_altitude_deg: f64,

    /// Pala-bha: noon shadow at the equinox of a vertical gnomon of height R
    pub pala_bha: f64,
}

/// Derive the latitude constants for a validated site.
///
/// # Returns
///
/// * `Ok(SiteConstants)` - co-latitude, pole altitude and pala-bha
/// * `Err(YantraError::DegenerateGeometry)` - pala-bha overflowed (scale near `f64::MAX`)
pub fn site_constants(params: &ObservationParameters) -> YantraResult<SiteConstants> {
    let pala_bha = tangent_distance(params.scale(), params.latitude());
    check_lengths("Site", &[("pala_bha".to_string(), pala_bha)])?;
    Ok(SiteConstants {
        colatitude_deg: params.latitude().complement().0,
        pole_altitude_deg: params.latitude_deg(),
        pala_bha,
    })
}

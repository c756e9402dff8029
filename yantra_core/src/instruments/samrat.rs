//! # Samrat Yantra
//!
//! The great equinoctial sundial: a right-triangular gnomon wall whose
//! sloped edge points at the celestial pole, flanked by two quadrant arcs
//! that catch its shadow.
//!
//! ## Geometry
//!
//! ```text
//!                        ╱│
//!          hypotenuse  ╱  │
//!        (R / sin φ) ╱    │ height = R
//!                  ╱ φ    │
//!                 ────────┘
//!               base (R / tan φ)
//! ```
//!
//! - Gnomon angle = φ (edge parallel to Earth's axis)
//! - Quadrant radius = R
//! - Hour lines at atan(tan 15h · sin φ) for h = −6..=6
//! - Declination scale along the gnomon edge at R·tan δ, up to ±ε
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::config::EngineConfig;
//! use yantra_core::instruments::samrat::compute_samrat;
//! use yantra_core::validation::validate;
//!
//! let params = validate(28.6, 1.0).unwrap();
//! let samrat = compute_samrat(&params, &EngineConfig::default()).unwrap();
//!
//! assert_eq!(samrat.gnomon_angle_deg, 28.6);
//! assert!((samrat.hypotenuse_length - 2.089).abs() < 1e-3);
//! assert_eq!(samrat.hour_lines.len(), 13);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::equations::{
    gnomon_base_length, gnomon_hypotenuse, hour_angle, quadrant_hour_graduation, stepped_to_limit, tangent_distance,
};
use crate::errors::YantraResult;
use crate::instruments::{check_dimensions, InstrumentId};
use crate::units::Degrees;
use crate::validation::ObservationParameters;

/// First hour line (sunrise at the equinox, 6 hours before noon)
pub const FIRST_HOUR: i32 = -6;

/// Last hour line (sunset at the equinox, 6 hours after noon)
pub const LAST_HOUR: i32 = 6;

/// Samrat Yantra construction dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamratDimensions {
    /// Angle of the gnomon edge above the horizontal (= latitude)
    pub gnomon_angle_deg: f64,

    /// Length of the sloped gnomon edge
    pub hypotenuse_length: f64,

    /// Vertical rise of the gnomon edge
    pub gnomon_height: f64,

    /// Horizontal run of the gnomon along the meridian
    pub gnomon_base_length: f64,

    /// Radius of both quadrant arcs
    pub quadrant_radius: f64,

    /// One line per whole hour from −6 to +6
    pub hour_lines: Vec<HourLine>,

    /// Declination marks along the gnomon edge, mirrored north and south
    pub declination_marks: Vec<DeclinationMark>,
}

/// An hour graduation on the quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourLine {
    /// Hours from local noon, negative in the morning
    pub hour: i32,

    /// Solar hour angle, 15° per hour
    pub hour_angle_deg: f64,

    /// Angle of the line on the quadrant, in [−90°, 90°]
    pub graduation_angle_deg: f64,
}

/// A mark on the gnomon edge for a given solar declination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeclinationMark {
    /// Declination, degrees (applies to both +δ and −δ)
    pub declination_deg: f64,

    /// Distance along the gnomon edge from the point opposite the quadrant centre
    pub distance_from_centre: f64,
}

impl SamratDimensions {
    /// Graduation angle for a given hour, if it is on the dial.
    pub fn graduation_for(&self, hour: i32) -> Option<f64> {
        self.hour_lines
            .iter()
            .find(|line| line.hour == hour)
            .map(|line| line.graduation_angle_deg)
    }

    pub fn lengths(&self) -> Vec<(String, f64)> {
        let mut lengths = vec![
            ("hypotenuse_length".to_string(), self.hypotenuse_length),
            ("gnomon_height".to_string(), self.gnomon_height),
            ("gnomon_base_length".to_string(), self.gnomon_base_length),
            ("quadrant_radius".to_string(), self.quadrant_radius),
        ];
        lengths.extend(self.declination_marks.iter().map(|mark| {
            (
                format!("declination_marks[{}].distance_from_centre", mark.declination_deg),
                mark.distance_from_centre,
            )
        }));
        lengths
    }

    pub fn angles(&self) -> Vec<(String, f64)> {
        let mut angles = vec![("gnomon_angle_deg".to_string(), self.gnomon_angle_deg)];
        for line in &self.hour_lines {
            angles.push((format!("hour_lines[{}].hour_angle_deg", line.hour), line.hour_angle_deg));
            angles.push((format!("hour_lines[{}].graduation_angle_deg", line.hour), line.graduation_angle_deg));
        }
        angles.extend(
            self.declination_marks
                .iter()
                .map(|mark| ("declination_marks.declination_deg".to_string(), mark.declination_deg)),
        );
        angles
    }
}

/// Derive the Samrat Yantra dimensions.
///
/// # Returns
///
/// * `Ok(SamratDimensions)` - Construction dimensions
/// * `Err(YantraError::DegenerateGeometry)` - A length overflowed or vanished
///   (only reachable for latitudes within floating-point noise of 0° or 90°,
///   or scales near `f64::MAX`)
pub fn compute_samrat(params: &ObservationParameters, config: &EngineConfig) -> YantraResult<SamratDimensions> {
    let latitude = params.latitude();
    let r = params.scale();

    let hour_lines = (FIRST_HOUR..=LAST_HOUR)
        .map(|hour| {
            let h = hour_angle(hour);
            HourLine {
                hour,
                hour_angle_deg: h.0,
                graduation_angle_deg: quadrant_hour_graduation(h, latitude).0,
            }
        })
        .collect();

    let declination_marks = stepped_to_limit(config.samrat_declination_step_deg, config.obliquity_deg)
        .into_iter()
        .map(|declination_deg| DeclinationMark {
            declination_deg,
            distance_from_centre: tangent_distance(r, Degrees(declination_deg)),
        })
        .collect();

    let dims = SamratDimensions {
        gnomon_angle_deg: params.latitude_deg(),
        hypotenuse_length: gnomon_hypotenuse(r, latitude),
        gnomon_height: r,
        gnomon_base_length: gnomon_base_length(r, latitude),
        quadrant_radius: r,
        hour_lines,
        declination_marks,
    };

    check_dimensions(InstrumentId::Samrat, &dims.lengths(), &dims.angles())?;
    tracing::debug!(hypotenuse = dims.hypotenuse_length, "samrat derived");
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    fn samrat(latitude_deg: f64, scale: f64) -> SamratDimensions {
        let params = validate(latitude_deg, scale).unwrap();
        compute_samrat(&params, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_new_delhi_scenario() {
        let d = samrat(28.6, 1.0);
        assert_eq!(d.gnomon_angle_deg, 28.6);
        // 1 / sin(28.6°) = 2.0890
        assert!((d.hypotenuse_length - 2.093).abs() < 5e-3, "L = {}", d.hypotenuse_length);
        assert!((d.hypotenuse_length - 1.0 / 28.6_f64.to_radians().sin()).abs() < 1e-12);
        assert_eq!(d.quadrant_radius, 1.0);
    }

    #[test]
    fn test_gnomon_triangle_closes() {
        let d = samrat(40.0, 3.0);
        let closed = (d.gnomon_height.powi(2) + d.gnomon_base_length.powi(2)).sqrt();
        assert!((closed - d.hypotenuse_length).abs() < 1e-9);
        assert!((d.gnomon_height / d.hypotenuse_length - 40.0_f64.to_radians().sin()).abs() < 1e-12);
    }

    #[test]
    fn test_hour_lines_cover_sunrise_to_sunset() {
        let d = samrat(26.9167, 10.0);
        let hours: Vec<i32> = d.hour_lines.iter().map(|l| l.hour).collect();
        assert_eq!(hours, (-6..=6).collect::<Vec<_>>());
        assert_eq!(d.graduation_for(0), Some(0.0));
        assert_eq!(d.graduation_for(6), Some(90.0));
        assert_eq!(d.graduation_for(-6), Some(-90.0));
        assert_eq!(d.graduation_for(7), None);
    }

    #[test]
    fn test_hour_lines_symmetric_about_noon() {
        let d = samrat(33.3, 1.0);
        for h in 1..=6 {
            let am = d.graduation_for(-h).unwrap();
            let pm = d.graduation_for(h).unwrap();
            assert!((am + pm).abs() < 1e-12, "h = {}: {} vs {}", h, am, pm);
        }
    }

    #[test]
    fn test_hour_lines_within_range_and_monotonic() {
        let d = samrat(0.0001, 1.0);
        for pair in d.hour_lines.windows(2) {
            assert!(pair[1].graduation_angle_deg >= pair[0].graduation_angle_deg);
        }
        assert!(d.hour_lines.iter().all(|l| (-90.0..=90.0).contains(&l.graduation_angle_deg)));
    }

    #[test]
    fn test_three_pm_line_at_jaipur() {
        // atan(tan 45° · sin 26.9167°) = 24.35°
        let d = samrat(26.9167, 1.0);
        let theta = d.graduation_for(3).unwrap();
        assert!((theta - 24.35).abs() < 0.01, "θ = {}", theta);
    }

    #[test]
    fn test_declination_scale_reaches_obliquity() {
        let d = samrat(26.9167, 2.0);
        let decl: Vec<f64> = d.declination_marks.iter().map(|m| m.declination_deg).collect();
        assert_eq!(decl, vec![5.0, 10.0, 15.0, 20.0, 23.44]);

        // 15° declination at R·tan 15°
        let fifteen = d.declination_marks[2];
        assert!((fifteen.distance_from_centre - 2.0 * 15.0_f64.to_radians().tan()).abs() < 1e-12);
    }

    #[test]
    fn test_near_pole_and_equator_are_finite() {
        for lat in [0.0001, 89.9999] {
            let d = samrat(lat, 1.0);
            assert!(d.hypotenuse_length.is_finite() && d.hypotenuse_length > 0.0);
            assert!(d.gnomon_base_length.is_finite() && d.gnomon_base_length > 0.0);
        }
    }

    #[test]
    fn test_overflowing_scale_is_degenerate() {
        let params = validate(0.0001, f64::MAX / 2.0).unwrap();
        let err = compute_samrat(&params, &EngineConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");
    }
}

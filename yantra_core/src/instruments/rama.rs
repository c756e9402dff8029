//! # Rama Yantra
//!
//! A roofless cylinder with a central pillar as tall as the wall. The shadow
//! of the pillar top gives the sun's altitude and azimuth: high sun throws it
//! onto the floor, low sun onto the inner face of the wall.
//!
//! The construction is latitude-independent. Correcting azimuth readings for
//! the site happens at observation time, outside the engine.
//!
//! ## Proportions
//!
//! - Cylinder radius = R
//! - Wall height = pillar height = R
//!
//! With these proportions the shadow crosses from wall to floor at 45°.
//!
//! ## Altitude Scale
//!
//! ```text
//!   wall  (tan a ≤ H/R):  d = R·tan a      measured down from the wall top
//!   floor (tan a > H/R):  d = H / tan a    measured out from the pillar axis
//! ```

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::equations::{arc_length, full_circle, open_interval, shadow_floor_distance, tangent_distance};
use crate::errors::YantraResult;
use crate::instruments::{check_dimensions, InstrumentId};
use crate::units::Degrees;
use crate::validation::ObservationParameters;

/// Cylinder radius as a multiple of R
pub const RADIUS_RATIO: f64 = 1.0;

/// Wall and pillar height as a multiple of R
pub const HEIGHT_RATIO: f64 = 1.0;

/// Rama Yantra construction dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RamaDimensions {
    /// Inner radius of the cylindrical wall
    pub cylinder_radius: f64,

    /// Height of the wall
    pub cylinder_height: f64,

    /// Height of the central pillar
    pub pillar_height: f64,

    /// Angular width of each sector
    pub azimuth_step_deg: f64,

    /// Number of sectors around the floor
    pub sector_count: usize,

    /// Radial sector lines, [0°, 360°) from north
    pub azimuth_lines_deg: Vec<f64>,

    /// Length of wall between adjacent sector lines
    pub sector_arc_length: f64,

    /// Altitude graduations on the wall and floor
    pub altitude_marks: Vec<AltitudeMark>,
}

/// Where an altitude graduation is engraved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleSurface {
    /// Inner face of the wall, measured down from the top
    Wall,
    /// Floor, measured out from the pillar axis
    Floor,
}

/// One altitude graduation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudeMark {
    pub altitude_deg: f64,
    pub surface: ScaleSurface,
    pub distance: f64,
}

impl RamaDimensions {
    pub fn lengths(&self) -> Vec<(String, f64)> {
        let mut lengths = vec![
            ("cylinder_radius".to_string(), self.cylinder_radius),
            ("cylinder_height".to_string(), self.cylinder_height),
            ("pillar_height".to_string(), self.pillar_height),
            ("sector_arc_length".to_string(), self.sector_arc_length),
        ];
        lengths.extend(
            self.altitude_marks
                .iter()
                .map(|m| (format!("altitude_marks[{}].distance", m.altitude_deg), m.distance)),
        );
        lengths
    }

    pub fn angles(&self) -> Vec<(String, f64)> {
        let mut angles = vec![("azimuth_step_deg".to_string(), self.azimuth_step_deg)];
        angles.extend(self.azimuth_lines_deg.iter().map(|&a| ("azimuth_lines_deg".to_string(), a)));
        angles.extend(
            self.altitude_marks
                .iter()
                .map(|m| ("altitude_marks.altitude_deg".to_string(), m.altitude_deg)),
        );
        angles
    }
}

/// Derive the Rama Yantra dimensions. Reads only the scale.
pub fn compute_rama(params: &ObservationParameters, config: &EngineConfig) -> YantraResult<RamaDimensions> {
    let r = params.scale();
    let radius = RADIUS_RATIO * r;
    let height = HEIGHT_RATIO * r;
    let step = config.rama_azimuth_step_deg;

    let azimuth_lines_deg = full_circle(step);

    let altitude_marks = open_interval(config.rama_altitude_step_deg, 90.0)
        .into_iter()
        .map(|altitude_deg| {
            let a = Degrees(altitude_deg);
            let drop = tangent_distance(radius, a);
            if drop <= height {
                AltitudeMark {
                    altitude_deg,
                    surface: ScaleSurface::Wall,
                    distance: drop,
                }
            } else {
                AltitudeMark {
                    altitude_deg,
                    surface: ScaleSurface::Floor,
                    distance: shadow_floor_distance(height, a),
                }
            }
        })
        .collect();

    let dims = RamaDimensions {
        cylinder_radius: radius,
        cylinder_height: height,
        pillar_height: height,
        azimuth_step_deg: step,
        sector_count: azimuth_lines_deg.len(),
        azimuth_lines_deg,
        sector_arc_length: arc_length(radius, Degrees(step)),
        altitude_marks,
    };

    check_dimensions(InstrumentId::Rama, &dims.lengths(), &dims.angles())?;
    tracing::debug!(sectors = dims.sector_count, "rama derived");
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    fn rama(latitude_deg: f64, scale: f64) -> RamaDimensions {
        let params = validate(latitude_deg, scale).unwrap();
        compute_rama(&params, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_proportions() {
        let d = rama(26.9167, 3.0);
        assert_eq!(d.cylinder_radius, 3.0);
        assert_eq!(d.cylinder_height, 3.0);
        assert_eq!(d.pillar_height, 3.0);
    }

    #[test]
    fn test_twelve_sectors_by_default() {
        let d = rama(26.9167, 1.0);
        assert_eq!(d.sector_count, 12);
        assert_eq!(d.azimuth_lines_deg[1], 30.0);
        assert!((d.sector_arc_length - std::f64::consts::PI / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_altitude_scale_switches_at_45() {
        let d = rama(26.9167, 2.0);
        assert_eq!(d.altitude_marks.len(), 17);
        for m in &d.altitude_marks {
            let expected = if m.altitude_deg <= 45.0 { ScaleSurface::Wall } else { ScaleSurface::Floor };
            assert_eq!(m.surface, expected, "altitude {}", m.altitude_deg);
        }
    }

    #[test]
    fn test_altitude_distances() {
        let d = rama(26.9167, 2.0);
        let at = |alt: f64| d.altitude_marks.iter().find(|m| m.altitude_deg == alt).unwrap();

        // 45° sits at R·tan 45° = R, the last wall mark
        assert!((at(45.0).distance - 2.0).abs() < 1e-12);
        assert!((at(30.0).distance - 2.0 * 30.0_f64.to_radians().tan()).abs() < 1e-12);
        assert!((at(60.0).distance - 2.0 / 60.0_f64.to_radians().tan()).abs() < 1e-12);
    }

    #[test]
    fn test_latitude_independent() {
        assert_eq!(rama(5.0, 1.5), rama(70.0, 1.5));
    }
}

//! # Dakshinottara Bhitti Yantra
//!
//! The meridian wall: a vertical wall aligned exactly north-south carrying
//! two graduated quadrants of radius R, read by a peg at the common centre.
//! The sun's noon zenith distance is read off directly.
//!
//! Unlike the Samrat hour scale, the graduation here is linear: equal steps
//! of zenith distance are equal arc lengths.
//!
//! ## Reference Marks
//!
//! Meridian crossings of four reference points, for declination δ:
//! z = φ − δ, south of the zenith when positive.
//!
//! | mark              | δ    | crossing            |
//! |-------------------|------|---------------------|
//! | celestial equator | 0    | z = φ, south        |
//! | celestial pole    | 90°  | z = 90° − φ, north  |
//! | summer solstice   | +ε   | z = φ − ε           |
//! | winter solstice   | −ε   | z = φ + ε, south    |

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::equations::{arc_length, closed_scale, meridian_zenith_distance};
use crate::errors::YantraResult;
use crate::instruments::{check_dimensions, InstrumentId};
use crate::units::Degrees;
use crate::validation::ObservationParameters;

/// Meridian wall construction dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BhittiDimensions {
    /// Radius of both graduated quadrants
    pub arc_radius: f64,

    /// Length of one 90° quadrant arc
    pub quadrant_arc_length: f64,

    /// Spacing between zenith-distance graduations
    pub graduation_step_deg: f64,

    /// Zenith distances from 0° (zenith) to 90° (horizon), engraved
    /// identically on the north and south quadrants. The horizon mark is
    /// always present, even when the step does not divide 90°.
    pub graduations_deg: Vec<f64>,

    /// 90° − latitude
    pub colatitude_deg: f64,

    /// Equator, pole and solstice crossings
    pub reference_marks: Vec<ReferenceMark>,
}

/// Which quadrant of the wall a mark falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeridianSide {
    North,
    South,
}

/// What a reference mark indicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceMarkKind {
    CelestialEquator,
    CelestialPole,
    SummerSolstice,
    WinterSolstice,
}

impl ReferenceMarkKind {
    /// Declination of the point this mark records.
    pub fn declination(&self, obliquity: Degrees) -> Degrees {
        match self {
            ReferenceMarkKind::CelestialEquator => Degrees(0.0),
            ReferenceMarkKind::CelestialPole => Degrees(90.0),
            ReferenceMarkKind::SummerSolstice => obliquity,
            ReferenceMarkKind::WinterSolstice => -obliquity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReferenceMarkKind::CelestialEquator => "Celestial equator",
            ReferenceMarkKind::CelestialPole => "Celestial pole",
            ReferenceMarkKind::SummerSolstice => "Summer solstice",
            ReferenceMarkKind::WinterSolstice => "Winter solstice",
        }
    }
}

/// A reference line on the meridian arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMark {
    pub kind: ReferenceMarkKind,

    pub side: MeridianSide,

    /// Unsigned zenith distance on `side`, in [0°, 180°)
    pub zenith_distance_deg: f64,

    /// 90° − zenith distance; negative when the point transits below the horizon
    pub altitude_deg: f64,
}

impl ReferenceMark {
    fn at(kind: ReferenceMarkKind, latitude: Degrees, obliquity: Degrees) -> Self {
        let z = meridian_zenith_distance(latitude, kind.declination(obliquity)).0;
        let side = if z < 0.0 { MeridianSide::North } else { MeridianSide::South };
        let zenith_distance_deg = z.abs();
        ReferenceMark {
            kind,
            side,
            zenith_distance_deg,
            altitude_deg: 90.0 - zenith_distance_deg,
        }
    }
}

impl BhittiDimensions {
    pub fn mark(&self, kind: ReferenceMarkKind) -> Option<&ReferenceMark> {
        self.reference_marks.iter().find(|m| m.kind == kind)
    }

    pub fn lengths(&self) -> Vec<(String, f64)> {
        vec![
            ("arc_radius".to_string(), self.arc_radius),
            ("quadrant_arc_length".to_string(), self.quadrant_arc_length),
        ]
    }

    pub fn angles(&self) -> Vec<(String, f64)> {
        let mut angles = vec![
            ("graduation_step_deg".to_string(), self.graduation_step_deg),
            ("colatitude_deg".to_string(), self.colatitude_deg),
        ];
        angles.extend(self.graduations_deg.iter().map(|&z| ("graduations_deg".to_string(), z)));
        for mark in &self.reference_marks {
            angles.push((format!("{:?}.zenith_distance_deg", mark.kind), mark.zenith_distance_deg));
            angles.push((format!("{:?}.altitude_deg", mark.kind), mark.altitude_deg));
        }
        angles
    }
}

/// Derive the meridian wall dimensions.
pub fn compute_bhitti(params: &ObservationParameters, config: &EngineConfig) -> YantraResult<BhittiDimensions> {
    let latitude = params.latitude();
    let obliquity = Degrees(config.obliquity_deg);
    let r = params.scale();

    let reference_marks = [
        ReferenceMarkKind::CelestialEquator,
        ReferenceMarkKind::CelestialPole,
        ReferenceMarkKind::SummerSolstice,
        ReferenceMarkKind::WinterSolstice,
    ]
    .into_iter()
    .map(|kind| ReferenceMark::at(kind, latitude, obliquity))
    .collect();

    let dims = BhittiDimensions {
        arc_radius: r,
        quadrant_arc_length: arc_length(r, Degrees(90.0)),
        graduation_step_deg: config.bhitti_graduation_step_deg,
        graduations_deg: closed_scale(config.bhitti_graduation_step_deg, 90.0),
        colatitude_deg: latitude.complement().0,
        reference_marks,
    };

    check_dimensions(InstrumentId::Bhitti, &dims.lengths(), &dims.angles())?;
    tracing::debug!(marks = dims.graduations_deg.len(), "bhitti derived");
    Ok(dims)
}

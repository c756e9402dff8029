//! # Nadi Valaya Yantra
//!
//! The equatorial ring dial: a disc set parallel to the equator with a rod
//! through its centre along the polar axis. The sun lights the north face
//! from the spring to the autumn equinox and the south face for the rest of
//! the year.
//!
//! Both faces are returned. Choosing which one to read on a given date is
//! the consumer's job.
//!
//! ## Face Layout
//!
//! Each face carries 24 hour marks, 15° apart, with noon at 0°. Position
//! angles increase clockwise as seen by an observer facing the dial, so the
//! south face is the mirror image of the north face.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::equations::{arc_length, hour_angle, DEGREES_PER_HOUR};
use crate::errors::YantraResult;
use crate::instruments::{check_dimensions, InstrumentId};
use crate::units::Degrees;
use crate::validation::ObservationParameters;

/// Hour marks on each face, from midnight (−12) to 11 p.m. (+11)
pub const HOURS_PER_FACE: std::ops::RangeInclusive<i32> = -12..=11;

/// Ring dial construction dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NadiValayaDimensions {
    /// Tilt of the dial plane above the horizontal (= 90° − latitude)
    pub ring_tilt_deg: f64,

    /// Radius of the dial face
    pub ring_radius: f64,

    /// Distance along the rim between adjacent hour marks
    pub hour_arc_length: f64,

    /// Face read from the spring to the autumn equinox
    pub north_face: DialFace,

    /// Face read from the autumn to the spring equinox
    pub south_face: DialFace,
}

/// Which way a dial face looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
}

/// Hour graduations for one face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialFace {
    pub facing: Facing,
    pub hour_marks: Vec<DialHourMark>,
}

/// One hour mark on a dial face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialHourMark {
    /// Hours from local noon
    pub hour: i32,

    /// Position on the face, [0°, 360°) clockwise from the noon mark
    pub position_angle_deg: f64,
}

impl DialFace {
    fn graduated(facing: Facing) -> Self {
        let hour_marks = HOURS_PER_FACE
            .map(|hour| {
                let h = hour_angle(hour);
                let position = match facing {
                    Facing::North => h,
                    Facing::South => -h,
                };
                DialHourMark {
                    hour,
                    position_angle_deg: position.normalized().0,
                }
            })
            .collect();
        DialFace { facing, hour_marks }
    }

    pub fn position_of(&self, hour: i32) -> Option<f64> {
        self.hour_marks
            .iter()
            .find(|m| m.hour == hour)
            .map(|m| m.position_angle_deg)
    }
}

impl NadiValayaDimensions {
    pub fn lengths(&self) -> Vec<(String, f64)> {
        vec![
            ("ring_radius".to_string(), self.ring_radius),
            ("hour_arc_length".to_string(), self.hour_arc_length),
        ]
    }

    pub fn angles(&self) -> Vec<(String, f64)> {
        let mut angles = vec![("ring_tilt_deg".to_string(), self.ring_tilt_deg)];
        for face in [&self.north_face, &self.south_face] {
            angles.extend(face.hour_marks.iter().map(|m| {
                (
                    format!("{:?}_face[{}].position_angle_deg", face.facing, m.hour),
                    m.position_angle_deg,
                )
            }));
        }
        angles
    }
}

/// Derive the ring dial dimensions.
///
/// Latitude enters only through the tilt; the face graduations are the same
/// at every site.
pub fn compute_nadi_valaya(
    params: &ObservationParameters,
    _config: &EngineConfig,
) -> YantraResult<NadiValayaDimensions> {
    let r = params.scale();

    let dims = NadiValayaDimensions {
        ring_tilt_deg: params.latitude().complement().0,
        ring_radius: r,
        hour_arc_length: arc_length(r, Degrees(DEGREES_PER_HOUR)),
        north_face: DialFace::graduated(Facing::North),
        south_face: DialFace::graduated(Facing::South),
    };

    check_dimensions(InstrumentId::NadiValaya, &dims.lengths(), &dims.angles())?;
    tracing::debug!(tilt = dims.ring_tilt_deg, "nadi valaya derived");
    Ok(dims)
}

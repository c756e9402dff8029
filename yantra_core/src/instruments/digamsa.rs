//! # Digamsa Yantra
//!
//! The azimuth instrument: a central pillar inside two concentric circular
//! walls on a levelled platform. The top of the outer wall carries a 360°
//! azimuth circle, zero at true north.
//!
//! Latitude does not enter any dimension.
//!
//! ## Proportions
//!
//! | part              | multiple of R |
//! |-------------------|---------------|
//! | outer ring radius | 1.0 (platform diameter 2R) |
//! | inner ring radius | 0.5           |
//! | pillar height     | 0.2 (R/5)     |

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::equations::{arc_length, full_circle};
use crate::errors::YantraResult;
use crate::instruments::{check_dimensions, InstrumentId};
use crate::units::Degrees;
use crate::validation::ObservationParameters;

pub const OUTER_RING_RATIO: f64 = 1.0;

pub const INNER_RING_RATIO: f64 = 0.5;

pub const PILLAR_HEIGHT_RATIO: f64 = 0.2;

/// Digamsa Yantra construction dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigamsaDimensions {
    /// Radius of the outer (graduated) wall
    pub outer_ring_radius: f64,

    /// Radius of the inner wall
    pub inner_ring_radius: f64,

    /// Diameter of the circular platform
    pub platform_diameter: f64,

    /// Height of the central sight pillar
    pub pillar_height: f64,

    pub azimuth_step_deg: f64,

    /// Azimuth graduations, [0°, 360°) from north
    pub azimuth_graduations_deg: Vec<f64>,

    /// Distance along the outer rim between adjacent graduations
    pub graduation_arc_length: f64,
}

impl DigamsaDimensions {
    pub fn lengths(&self) -> Vec<(String, f64)> {
        vec![
            ("outer_ring_radius".to_string(), self.outer_ring_radius),
            ("inner_ring_radius".to_string(), self.inner_ring_radius),
            ("platform_diameter".to_string(), self.platform_diameter),
            ("pillar_height".to_string(), self.pillar_height),
            ("graduation_arc_length".to_string(), self.graduation_arc_length),
        ]
    }

    pub fn angles(&self) -> Vec<(String, f64)> {
        let mut angles = vec![("azimuth_step_deg".to_string(), self.azimuth_step_deg)];
        angles.extend(
            self.azimuth_graduations_deg
                .iter()
                .map(|&a| ("azimuth_graduations_deg".to_string(), a)),
        );
        angles
    }
}

/// Derive the Digamsa Yantra dimensions. Reads only the scale.
pub fn compute_digamsa(params: &ObservationParameters, config: &EngineConfig) -> YantraResult<DigamsaDimensions> {
    let r = params.scale();
    let outer = OUTER_RING_RATIO * r;
    let step = config.digamsa_azimuth_step_deg;

    let dims = DigamsaDimensions {
        outer_ring_radius: outer,
        inner_ring_radius: INNER_RING_RATIO * r,
        platform_diameter: 2.0 * outer,
        pillar_height: PILLAR_HEIGHT_RATIO * r,
        azimuth_step_deg: step,
        azimuth_graduations_deg: full_circle(step),
        graduation_arc_length: arc_length(outer, Degrees(step)),
    };

    check_dimensions(InstrumentId::Digamsa, &dims.lengths(), &dims.angles())?;
    tracing::debug!(graduations = dims.azimuth_graduations_deg.len(), "digamsa derived");
    Ok(dims)
}

//! # Instrument Equations
//!
//! The trigonometric relations every instrument module draws on. Keeping the
//! formulas in one place means each can be checked once against a reference
//! and reused across instruments.
//!
//! ## Modules
//!
//! - [`gnomonics`] - Hour-line, gnomon-triangle, tangent-scale and meridian formulas
//! - [`graduations`] - Evenly spaced mark generators
//!
//! ## Angle Conventions
//!
//! - All public inputs and outputs are in degrees; radians stay internal
//! - Azimuth and dial position angles are normalized to [0°, 360°)
//! - Hour-line angles are signed, negative before noon

pub mod gnomonics;
pub mod graduations;

pub use gnomonics::{
    arc_length,
    gnomon_base_length,
    gnomon_hypotenuse,
    hour_angle,
    meridian_zenith_distance,
    quadrant_hour_graduation,
    shadow_floor_distance,
    tangent_distance,
    DEGREES_PER_HOUR,
};

pub use graduations::{closed_scale, full_circle, open_interval, stepped_to_limit, uniform_scale};

//! # Engine Entry Point
//!
//! Validates the inputs once, then runs the five instrument derivations and
//! collects them into a [`ComputationResult`].
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::config::EngineConfig;
//! use yantra_core::engine::compute;
//!
//! let result = compute(28.6, 1.0, &EngineConfig::default()).unwrap();
//! assert_eq!(result.len(), 5);
//!
//! let tilt = result.nadi_valaya().unwrap().ring_tilt_deg;
//! assert!((tilt - 61.4).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calibration::{compute_time_calibration, site_constants, SiteConstants, TimeCalibration};
use crate::config::EngineConfig;
use crate::errors::YantraResult;
use crate::instruments::{
    compute_bhitti, compute_digamsa, compute_nadi_valaya, compute_rama, compute_samrat, ComputationResult,
    InstrumentDimensions,
};
use crate::validation::{validate, ObservationParameters};

/// Validate `(latitude_deg, scale)` and derive all five instruments.
///
/// # Returns
///
/// * `Ok(ComputationResult)` - exactly five entries
/// * `Err(YantraError::OutOfRangeLatitude | NonPositiveScale)` - bad input
/// * `Err(YantraError::InvalidConfig)` - bad config
/// * `Err(YantraError::DegenerateGeometry)` - a derived value overflowed
pub fn compute(latitude_deg: f64, scale: f64, config: &EngineConfig) -> YantraResult<ComputationResult> {
    let params = validate(latitude_deg, scale)?;
    compute_validated(&params, config)
}

/// Derive all five instruments from parameters that are already validated.
///
/// Fails as a whole: no partial result is returned if any instrument fails.
pub fn compute_validated(params: &ObservationParameters, config: &EngineConfig) -> YantraResult<ComputationResult> {
    config.validate()?;

    let span = tracing::debug_span!("compute", latitude = params.latitude_deg(), scale = params.scale());
    let _guard = span.enter();

    let mut result = ComputationResult::new(*params);
    result.insert(InstrumentDimensions::Samrat(compute_samrat(params, config)?));
    result.insert(InstrumentDimensions::Bhitti(compute_bhitti(params, config)?));
    result.insert(InstrumentDimensions::NadiValaya(compute_nadi_valaya(params, config)?));
    result.insert(InstrumentDimensions::Rama(compute_rama(params, config)?));
    result.insert(InstrumentDimensions::Digamsa(compute_digamsa(params, config)?));

    tracing::debug!(instruments = result.len(), "computation complete");
    Ok(result)
}

/// Everything the shell asks for about one site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteRequest {
    pub latitude_deg: f64,
    pub scale: f64,

    /// Decimal degrees east; time calibration is skipped when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude_deg: Option<f64>,
}

/// Instrument dimensions plus site-level numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSurvey {
    pub site: SiteConstants,
    pub instruments: ComputationResult,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<TimeCalibration>,
}

/// Compute the instruments, site constants and (if a longitude is given)
/// the time calibration for one site.
pub fn survey(request: &SiteRequest, config: &EngineConfig) -> YantraResult<SiteSurvey> {
    let params = validate(request.latitude_deg, request.scale)?;
    let calibration = request
        .longitude_deg
        .map(|longitude| compute_time_calibration(longitude, config))
        .transpose()?;

    let instruments = compute_validated(&params, config)?;
    let site = site_constants(&params)?;

    Ok(SiteSurvey {
        site,
        instruments,
        calibration,
    })
}

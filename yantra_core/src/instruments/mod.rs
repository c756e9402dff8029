//! # Instrument Derivations
//!
//! One module per Yantra. Each follows the pattern:
//!
//! - `*Dimensions` - Construction dimensions (JSON-serializable)
//! - `compute_*(params, config) -> YantraResult<*Dimensions>` - Pure derivation
//!
//! Derivations are independent of one another: they read the same validated
//! [`ObservationParameters`] and [`EngineConfig`] and share nothing else, so
//! they may run in any order.
//!
//! Angles are in degrees; lengths are in the unit of the scale factor R.
//!
//! ## Available Instruments
//!
//! - [`samrat`] - Samrat Yantra, the great equinoctial sundial
//! - [`bhitti`] - Dakshinottara Bhitti Yantra, the meridian wall
//! - [`nadi_valaya`] - Nadi Valaya Yantra, the equatorial ring dial
//! - [`rama`] - Rama Yantra, the cylindrical altitude-azimuth instrument
//! - [`digamsa`] - Digamsa Yantra, the azimuth circle
//!
//! [`ObservationParameters`]: crate::validation::ObservationParameters
//! [`EngineConfig`]: crate::config::EngineConfig

pub mod bhitti;
pub mod digamsa;
pub mod nadi_valaya;
pub mod rama;
pub mod samrat;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{YantraError, YantraResult};
use crate::validation::ObservationParameters;

// Re-export commonly used types
pub use bhitti::{compute_bhitti, BhittiDimensions};
pub use digamsa::{compute_digamsa, DigamsaDimensions};
pub use nadi_valaya::{compute_nadi_valaya, NadiValayaDimensions};
pub use rama::{compute_rama, RamaDimensions};
pub use samrat::{compute_samrat, SamratDimensions};

/// Identifier for each of the five instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InstrumentId {
    Samrat,
    Bhitti,
    NadiValaya,
    Rama,
    Digamsa,
}

impl InstrumentId {
    /// All instruments, in presentation order
    pub const ALL: [InstrumentId; 5] = [
        InstrumentId::Samrat,
        InstrumentId::Bhitti,
        InstrumentId::NadiValaya,
        InstrumentId::Rama,
        InstrumentId::Digamsa,
    ];

    /// Full traditional name
    pub fn display_name(&self) -> &'static str {
        match self {
            InstrumentId::Samrat => "Samrat Yantra",
            InstrumentId::Bhitti => "Dakshinottara Bhitti Yantra",
            InstrumentId::NadiValaya => "Nadi Valaya Yantra",
            InstrumentId::Rama => "Rama Yantra",
            InstrumentId::Digamsa => "Digamsa Yantra",
        }
    }

    /// Stable lowercase code, e.g. for CLI filters
    pub fn code(&self) -> &'static str {
        match self {
            InstrumentId::Samrat => "samrat",
            InstrumentId::Bhitti => "bhitti",
            InstrumentId::NadiValaya => "nadi_valaya",
            InstrumentId::Rama => "rama",
            InstrumentId::Digamsa => "digamsa",
        }
    }

    /// Look up an instrument by its [`code`](Self::code).
    pub fn from_code(code: &str) -> Option<Self> {
        InstrumentId::ALL.into_iter().find(|id| id.code() == code)
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Dimensions of one instrument, tagged by which instrument it is.
///
/// The variants share nothing but the tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrument")]
pub enum InstrumentDimensions {
    Samrat(SamratDimensions),
    Bhitti(BhittiDimensions),
    NadiValaya(NadiValayaDimensions),
    Rama(RamaDimensions),
    Digamsa(DigamsaDimensions),
}

impl InstrumentDimensions {
    pub fn id(&self) -> InstrumentId {
        match self {
            InstrumentDimensions::Samrat(_) => InstrumentId::Samrat,
            InstrumentDimensions::Bhitti(_) => InstrumentId::Bhitti,
            InstrumentDimensions::NadiValaya(_) => InstrumentId::NadiValaya,
            InstrumentDimensions::Rama(_) => InstrumentId::Rama,
            InstrumentDimensions::Digamsa(_) => InstrumentId::Digamsa,
        }
    }

    /// Every length-valued output as `(name, value)`.
    pub fn lengths(&self) -> Vec<(String, f64)> {
        match self {
            InstrumentDimensions::Samrat(d) => d.lengths(),
            InstrumentDimensions::Bhitti(d) => d.lengths(),
            InstrumentDimensions::NadiValaya(d) => d.lengths(),
            InstrumentDimensions::Rama(d) => d.lengths(),
            InstrumentDimensions::Digamsa(d) => d.lengths(),
        }
    }

    /// Every angle-valued output as `(name, degrees)`.
    pub fn angles(&self) -> Vec<(String, f64)> {
        match self {
            InstrumentDimensions::Samrat(d) => d.angles(),
            InstrumentDimensions::Bhitti(d) => d.angles(),
            InstrumentDimensions::NadiValaya(d) => d.angles(),
            InstrumentDimensions::Rama(d) => d.angles(),
            InstrumentDimensions::Digamsa(d) => d.angles(),
        }
    }
}

/// The five instruments' dimensions for one (latitude, scale) pair.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "parameters": { "latitude_deg": 28.6, "scale": 1.0 },
///   "instruments": {
///     "Samrat": { "instrument": "Samrat", "gnomon_angle_deg": 28.6, "hypotenuse_length": 2.089 },
///     "NadiValaya": { "instrument": "NadiValaya", "ring_tilt_deg": 61.4, "ring_radius": 1.0 }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// The inputs these dimensions were derived from
    pub parameters: ObservationParameters,

    /// Dimensions keyed by instrument
    pub instruments: BTreeMap<InstrumentId, InstrumentDimensions>,
}

impl ComputationResult {
    pub fn new(parameters: ObservationParameters) -> Self {
        ComputationResult {
            parameters,
            instruments: BTreeMap::new(),
        }
    }

    /// Store dimensions under their own instrument id.
    pub fn insert(&mut self, dimensions: InstrumentDimensions) {
        self.instruments.insert(dimensions.id(), dimensions);
    }

    pub fn get(&self, id: InstrumentId) -> Option<&InstrumentDimensions> {
        self.instruments.get(&id)
    }

    pub fn samrat(&self) -> Option<&SamratDimensions> {
        match self.get(InstrumentId::Samrat) {
            Some(InstrumentDimensions::Samrat(d)) => Some(d),
            _ => None,
        }
    }

    pub fn bhitti(&self) -> Option<&BhittiDimensions> {
        match self.get(InstrumentId::Bhitti) {
            Some(InstrumentDimensions::Bhitti(d)) => Some(d),
            _ => None,
        }
    }

    pub fn nadi_valaya(&self) -> Option<&NadiValayaDimensions> {
        match self.get(InstrumentId::NadiValaya) {
            Some(InstrumentDimensions::NadiValaya(d)) => Some(d),
            _ => None,
        }
    }

    pub fn rama(&self) -> Option<&RamaDimensions> {
        match self.get(InstrumentId::Rama) {
            Some(InstrumentDimensions::Rama(d)) => Some(d),
            _ => None,
        }
    }

    pub fn digamsa(&self) -> Option<&DigamsaDimensions> {
        match self.get(InstrumentId::Digamsa) {
            Some(InstrumentDimensions::Digamsa(d)) => Some(d),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InstrumentId, &InstrumentDimensions)> {
        self.instruments.iter()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

/// Reject any length that is NaN, infinite, or not strictly positive.
///
/// `subject` names what the lengths belong to in the error and the log.
pub(crate) fn check_lengths(subject: &str, lengths: &[(String, f64)]) -> YantraResult<()> {
    for (name, value) in lengths {
        if !value.is_finite() || *value <= 0.0 {
            tracing::warn!(subject, quantity = %name, value, "degenerate length");
            return Err(YantraError::degenerate_geometry(
                subject,
                name.as_str(),
                format!("length must be finite and positive, got {}", value),
            ));
        }
    }
    Ok(())
}

/// Reject output containing NaN or infinite values, or lengths that are
/// not strictly positive.
pub(crate) fn check_dimensions(
    instrument: InstrumentId,
    lengths: &[(String, f64)],
    angles: &[(String, f64)],
) -> YantraResult<()> {
    check_lengths(instrument.display_name(), lengths)?;
    for (name, value) in angles {
        if !value.is_finite() {
            tracing::warn!(%instrument, quantity = %name, value, "degenerate angle");
            return Err(YantraError::degenerate_geometry(
                instrument.display_name(),
                name.as_str(),
                format!("angle must be finite, got {}", value),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::validation::validate;

    #[test]
    fn test_codes_roundtrip() {
        for id in InstrumentId::ALL {
            assert_eq!(InstrumentId::from_code(id.code()), Some(id));
        }
        assert_eq!(InstrumentId::from_code("astrolabe"), None);
    }

    #[test]
    fn test_result_lookup_by_id() {
        let params = validate(28.6, 1.0).unwrap();
        let config = EngineConfig::default();
        let mut result = ComputationResult::new(params);
        result.insert(InstrumentDimensions::Rama(compute_rama(&params, &config).unwrap()));

        assert_eq!(result.len(), 1);
        assert!(result.rama().is_some());
        assert!(result.samrat().is_none());
        assert_eq!(result.get(InstrumentId::Rama).map(|d| d.id()), Some(InstrumentId::Rama));
    }

    #[test]
    fn test_dimensions_tagged_serialization() {
        let params = validate(28.6, 1.0).unwrap();
        let dims = InstrumentDimensions::Digamsa(compute_digamsa(&params, &EngineConfig::default()).unwrap());
        let json = serde_json::to_string(&dims).unwrap();
        assert!(json.contains(r#""instrument":"Digamsa""#));

        let roundtrip: InstrumentDimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.id(), InstrumentId::Digamsa);
    }

    #[test]
    fn test_check_dimensions_rejects_infinite_length() {
        let lengths = vec![("hypotenuse_length".to_string(), f64::INFINITY)];
        let err = check_dimensions(InstrumentId::Samrat, &lengths, &[]).unwrap_err();
        assert_eq!(err.error_code(), "DEGENERATE_GEOMETRY");
        assert!(err.to_string().contains("hypotenuse_length"));
    }

    #[test]
    fn test_check_dimensions_rejects_zero_length() {
        let lengths = vec![("gnomon_base_length".to_string(), 0.0)];
        assert!(check_dimensions(InstrumentId::Samrat, &lengths, &[]).is_err());
    }

    #[test]
    fn test_check_dimensions_rejects_nan_angle() {
        let angles = vec![("ring_tilt_deg".to_string(), f64::NAN)];
        assert!(check_dimensions(InstrumentId::NadiValaya, &[], &angles).is_err());
    }
}

//! # yantra_core - Instrument Geometry Engine
//!
//! `yantra_core` turns an observer latitude φ and a linear scale factor R into
//! the construction dimensions of five historical astronomical instruments
//! (Yantras): angles, lengths and graduation tables ready for fabricating a
//! scaled replica. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from (φ, R, config) to dimensions
//! - **Validated once**: [`ObservationParameters`] can only be built in range
//! - **JSON-First**: All result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use yantra_core::{compute, EngineConfig};
//!
//! let result = compute(26.9167, 10.0, &EngineConfig::default()).unwrap();
//!
//! let samrat = result.samrat().unwrap();
//! assert_eq!(samrat.gnomon_angle_deg, 26.9167);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"Digamsa\""));
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - Entry points: validate, derive all five instruments, site survey
//! - [`instruments`] - One module per Yantra
//! - [`equations`] - Shared trigonometric relations and graduation generators
//! - [`validation`] - Input range checks
//! - [`calibration`] - Local-mean-time offset and site constants
//! - [`config`] - Engine settings and demo defaults
//! - [`units`] - Angle newtypes and degrees-minutes-seconds display
//! - [`errors`] - Structured error types
//! - [`file_io`] - Config file load and atomic save

pub mod calibration;
pub mod config;
pub mod engine;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod instruments;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use config::EngineConfig;
pub use engine::{compute, compute_validated, survey, SiteRequest, SiteSurvey};
pub use errors::{YantraError, YantraResult};
pub use file_io::{load_config, save_config};
pub use instruments::{ComputationResult, InstrumentDimensions, InstrumentId};
pub use validation::{validate, ObservationParameters};

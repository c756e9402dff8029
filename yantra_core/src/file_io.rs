//! # Config File I/O
//!
//! Reads and writes [`EngineConfig`] as pretty-printed JSON.
//!
//! - **Atomic saves**: write to `.tmp`, fsync, rename over the target
//! - **Validated loads**: a file that parses but holds out-of-range values
//!   is rejected with `InvalidConfig`
//! - **Partial files**: missing fields take their defaults
//!
//! ## Example
//!
//! ```rust,no_run
//! use yantra_core::config::EngineConfig;
//! use yantra_core::file_io::{load_config, save_config};
//! use std::path::Path;
//!
//! let path = Path::new("yantra.json");
//! save_config(&EngineConfig::default(), path)?;
//! let config = load_config(path)?;
//! assert_eq!(config.obliquity_deg, 23.44);
//! # Ok::<(), yantra_core::errors::YantraError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::config::EngineConfig;
use crate::errors::{YantraError, YantraResult};

/// Save a config with atomic write semantics.
///
/// The config is validated first; an invalid config is never written.
/// The temp file sits next to the target as `<name>.tmp` so the rename
/// stays on one filesystem.
pub fn save_config(config: &EngineConfig, path: &Path) -> YantraResult<()> {
    config.validate()?;

    let json = serde_json::to_string_pretty(config).map_err(|e| YantraError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| YantraError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| YantraError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;

    tmp_file
        .sync_all()
        .map_err(|e| YantraError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        YantraError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}

/// Load and validate a config file.
///
/// # Returns
///
/// * `Ok(EngineConfig)` - parsed and in range
/// * `Err(YantraError::FileError)` - I/O error
/// * `Err(YantraError::SerializationError)` - invalid JSON
/// * `Err(YantraError::InvalidConfig)` - a value is out of range
pub fn load_config(path: &Path) -> YantraResult<EngineConfig> {
    let mut file =
        File::open(path).map_err(|e| YantraError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| YantraError::file_error("read", path.display().to_string(), e.to_string()))?;

    let config: EngineConfig = serde_json::from_str(&contents)
        .map_err(|e| YantraError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    config.validate()?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_config_path(name: &str) -> PathBuf {
        temp_dir().join(format!("yantra_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(tmp_path_for(Path::new("/etc/yantra.json")), Path::new("/etc/yantra.json.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");

        let config = EngineConfig {
            obliquity_deg: 23.5,
            rama_azimuth_step_deg: 15.0,
            ..EngineConfig::default()
        };
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_config_path("atomic");

        save_config(&EngineConfig::default(), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_config_path("partial");
        fs::write(&path, r#"{ "obliquity_deg": 24.0 }"#).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.obliquity_deg, 24.0);
        assert_eq!(loaded.reference_meridian_deg, 82.5);
        assert_eq!(loaded.defaults, EngineConfig::default().defaults);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let path = temp_config_path("out_of_range");
        fs::write(&path, r#"{ "rama_azimuth_step_deg": 0.0 }"#).unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let path = temp_config_path("bad_json");
        fs::write(&path, "not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(&temp_config_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_save_refuses_invalid_config() {
        let path = temp_config_path("invalid");
        let config = EngineConfig {
            obliquity_deg: 95.0,
            ..EngineConfig::default()
        };

        assert!(save_config(&config, &path).is_err());
        assert!(!path.exists());
    }
}

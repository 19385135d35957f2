//! Thumbnail configuration management.
//!
//! Configuration is an explicit [`ThumbnailConfig`] value handed to the
//! pipeline. It can be loaded from a YAML file found through a list of
//! candidate locations, falling back to built-in defaults.

mod defaults;


pub use defaults::{OutputSettings, PercentileClip, ThumbnailConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ThumbError};

/// Environment variable naming a config file to use.
pub const CONFIG_ENV_VAR: &str = "S2RGB_CONFIG";

/// Candidate config file names searched for on disk.
const CONFIG_FILENAMES: &[&str] = &["s2rgb.yml", "s2rgb.yaml"];

/// A loaded configuration together with where it came from.
#[derive(Debug)]
pub struct ConfigHandle {
    pub config: ThumbnailConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Parse and validate a YAML config file.
pub fn load_config_file(path: &Path) -> Result<ThumbnailConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ThumbError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let config: ThumbnailConfig = serde_yaml::from_str(&contents).map_err(|e| {
        ThumbError::Config(format!("failed to parse {}: {}", path.display(), e))
    })?;
    config.validate()?;
    Ok(config)
}

/// Load configuration, optionally forcing a specific path.
///
/// An explicit `custom_path` must load successfully. Otherwise candidates
/// are tried in order and the first valid one wins; broken candidates are
/// recorded as warnings and the built-in defaults are used if none load.
pub fn load_config(custom_path: Option<&Path>) -> Result<ConfigHandle> {
    if let Some(path) = custom_path {
        let config = load_config_file(path)?;
        return Ok(ConfigHandle {
            config,
            source: Some(path.to_path_buf()),
            warnings: Vec::new(),
        });
    }

    let mut warnings = Vec::new();
    for candidate in config_candidates() {
        if !candidate.is_file() {
            continue;
        }
        match load_config_file(&candidate) {
            Ok(config) => {
                let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                return Ok(ConfigHandle {
                    config,
                    source: Some(source),
                    warnings,
                });
            }
            Err(err) => warnings.push(err.to_string()),
        }
    }

    Ok(ConfigHandle {
        config: ThumbnailConfig::default(),
        source: None,
        warnings,
    })
}

/// Config file locations, highest priority first.
fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(config_dir.join("s2rgb").join(name));
        }
    }

    candidates
}

/// Default location written by `s2rgb init`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("s2rgb").join(CONFIG_FILENAMES[0]))
}

use std::path::PathBuf;

use s2rgb_core::config::default_config_path;
use s2rgb_core::ThumbnailConfig;

/// Write the built-in configuration as YAML.
///
/// Defaults to the per-user config location. Won't overwrite an existing
/// file unless `force` is true.
pub fn cmd_init(out: Option<PathBuf>, force: bool) -> Result<PathBuf, String> {
    let path = match out {
        Some(path) => path,
        None => default_config_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?,
    };

    if path.exists() && !force {
        return Err(format!(
            "{} already exists, use --force to overwrite",
            path.display()
        ));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }

    let yaml = ThumbnailConfig::default()
        .to_yaml()
        .map_err(|e| e.to_string())?;
    std::fs::write(&path, yaml)
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    println!("Wrote default configuration to {}", path.display());
    Ok(path)
}

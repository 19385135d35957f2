//! Input directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::decoders::is_raster_path;
use crate::error::{Result, ThumbError};

/// Directory entries split into rasters to process and everything else.
#[derive(Debug, Default)]
pub struct Discovery {
    /// `.tif` files, sorted by file name
    pub rasters: Vec<PathBuf>,
    /// Other entries, sorted by file name
    pub skipped: Vec<PathBuf>,
}

/// List the immediate entries of `dir`, keeping regular files whose name
/// ends in `.tif` (any case).
///
/// Results are ordered lexicographically by file name so logs and outputs
/// come out in the same order on every platform.
pub fn discover_rasters(dir: &Path) -> Result<Discovery> {
    let input_err = |source| ThumbError::InputDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut discovery = Discovery::default();
    for entry in fs::read_dir(dir).map_err(input_err)? {
        let path = entry.map_err(input_err)?.path();
        if path.is_file() && is_raster_path(&path) {
            discovery.rasters.push(path);
        } else {
            discovery.skipped.push(path);
        }
    }

    discovery.rasters.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    discovery.skipped.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(discovery)
}

//! Batch thumbnail pipeline
//!
//! Every `.tif` in the input directory goes through
//! `open -> read bands -> normalize -> compose -> resize -> write`
//! on its own. A failure at any step is recorded for that file and the
//! batch moves on; only problems with the directories or the configuration
//! stop the run.
//!
//! Files are processed one at a time. Everything decoded for a file is
//! dropped before the next one is opened.

mod discovery;


pub use discovery::{discover_rasters, Discovery};

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::{debug, error, info};

use crate::compose::{compose_rgb, resize_exact};
use crate::config::{OutputSettings, ThumbnailConfig};
use crate::decoders::Raster;
use crate::error::{Result, ThumbError};
use crate::exporters::export_thumbnail;
use crate::models::{Band, BandMapping, BandRole, BatchSummary, FileOutcome, FileStage};
use crate::normalize::normalize;

/// Red, green and blue bands of one raster, in that order.
pub type RgbBands = [Band; 3];

/// Convert every raster in `input_dir` into a thumbnail in `output_dir`.
///
/// `input_dir` must exist. `output_dir` is created if missing.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    config: &ThumbnailConfig,
) -> Result<BatchSummary> {
    config.validate()?;

    let discovery = discover_rasters(input_dir)?;

    fs::create_dir_all(output_dir).map_err(|source| ThumbError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    info!(
        "Found {} raster(s) in {}",
        discovery.rasters.len(),
        input_dir.display()
    );

    let mut summary = BatchSummary {
        skipped: discovery.skipped.len(),
        ..Default::default()
    };
    for path in &discovery.skipped {
        debug!("Skipping {}", display_name(path));
    }

    for input in &discovery.rasters {
        summary.record(process_file(input, output_dir, config));
    }

    info!(
        "Batch complete: {} succeeded, {} failed, {} skipped",
        summary.succeeded, summary.failed, summary.skipped
    );
    Ok(summary)
}

/// Run one raster through the whole pipeline, never propagating its errors.
pub fn process_file(input: &Path, output_dir: &Path, config: &ThumbnailConfig) -> FileOutcome {
    let mut stage = FileStage::Discovered;

    match convert_file(input, output_dir, config, &mut stage) {
        Ok(output) => {
            info!("Saved to {}", output.display());
            FileOutcome::Written {
                input: input.to_path_buf(),
                output,
            }
        }
        Err(err) => {
            error!(
                "Error processing {} (after {}): {}",
                display_name(input),
                stage,
                err
            );
            FileOutcome::Failed {
                input: input.to_path_buf(),
                stage,
                reason: err.to_string(),
            }
        }
    }
}

fn convert_file(
    input: &Path,
    output_dir: &Path,
    config: &ThumbnailConfig,
    stage: &mut FileStage,
) -> Result<PathBuf> {
    let bands = {
        let raster = Raster::open(input)?;
        *stage = FileStage::Opened;
        read_bands(&raster, &config.bands)?
    };
    *stage = FileStage::BandsRead;

    info!("{}", band_summary(&display_name(input), &bands));

    let thumbnail = render_stages(&bands, config, stage)?;
    drop(bands);

    let output = output_path(input, output_dir, &config.output)?;
    export_thumbnail(
        &thumbnail,
        &output,
        config.output.format,
        config.output.jpeg_quality,
    )?;
    *stage = FileStage::Written;

    Ok(output)
}

/// Pull the bands mapped to red, green and blue out of `raster`.
pub fn read_bands(raster: &Raster, mapping: &BandMapping) -> Result<RgbBands> {
    Ok([
        raster.band(mapping.index(BandRole::Red))?,
        raster.band(mapping.index(BandRole::Green))?,
        raster.band(mapping.index(BandRole::Blue))?,
    ])
}

/// Normalize, compose and resize already-loaded bands.
pub fn render_thumbnail(bands: &RgbBands, config: &ThumbnailConfig) -> Result<RgbImage> {
    let mut stage = FileStage::BandsRead;
    render_stages(bands, config, &mut stage)
}

/// `render_thumbnail`, advancing `stage` as each step completes.
fn render_stages(
    bands: &RgbBands,
    config: &ThumbnailConfig,
    stage: &mut FileStage,
) -> Result<RgbImage> {
    let lower = config.percentiles.lower;
    let upper = config.percentiles.upper;
    let red = normalize(&bands[0], lower, upper)?;
    let green = normalize(&bands[1], lower, upper)?;
    let blue = normalize(&bands[2], lower, upper)?;
    *stage = FileStage::Normalized;

    let composite = compose_rgb(&red, &green, &blue)?;
    *stage = FileStage::Composited;

    let thumbnail = resize_exact(&composite, config.output.width, config.output.height);
    *stage = FileStage::Resized;

    Ok(thumbnail)
}

/// `<output_dir>/<input stem><suffix>.<ext>`
pub fn output_path(input: &Path, output_dir: &Path, output: &OutputSettings) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| {
        ThumbError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid input filename: {}", input.display()),
        ))
    })?;

    Ok(output_dir.join(format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        output.suffix,
        output.format.extension()
    )))
}

/// Diagnostic line with the raw range of each band:
/// `name | R[min, max] G[min, max] B[min, max]`
pub fn band_summary(name: &str, bands: &RgbBands) -> String {
    let ranges: Vec<String> = BandRole::ALL
        .iter()
        .zip(bands.iter())
        .map(|(role, band)| format!("{}{}", role.tag(), band.stats()))
        .collect();
    format!("{} | {}", name, ranges.join(" "))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

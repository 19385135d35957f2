use serde::Serialize;
use std::path::{Path, PathBuf};

use s2rgb_core::normalize::{percentile_bounds, validate_percentiles};
use s2rgb_core::pipeline::read_bands;
use s2rgb_core::{BandMapping, BandRole, Raster};

/// Inspection result for JSON output.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub file: String,
    pub dimensions: [u32; 2],
    pub band_count: usize,
    pub percentiles: [f32; 2],
    pub bands: Vec<BandReport>,
}

/// Raw range and clip bounds of one selected band.
#[derive(Debug, Serialize)]
pub struct BandReport {
    pub role: String,
    pub index: usize,
    pub min: f32,
    pub max: f32,
    /// Clip bounds at the requested percentiles, absent for all-nodata bands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<[f32; 2]>,
}

/// Decode one raster and describe the bands a conversion would use.
pub fn inspect_raster(
    input: &Path,
    bands: BandMapping,
    percentiles: (f32, f32),
) -> Result<InspectReport, String> {
    let (lower, upper) = percentiles;
    validate_percentiles(lower, upper).map_err(|e| e.to_string())?;

    let raster = Raster::open(input).map_err(|e| format!("{}: {}", input.display(), e))?;
    let selected = read_bands(&raster, &bands).map_err(|e| e.to_string())?;

    let reports = BandRole::ALL
        .iter()
        .zip(selected.iter())
        .map(|(role, band)| {
            let stats = band.stats();
            BandReport {
                role: role.name().to_string(),
                index: bands.index(*role),
                min: stats.min,
                max: stats.max,
                clip: percentile_bounds(band, lower, upper).map(|(lo, hi)| [lo, hi]),
            }
        })
        .collect();

    Ok(InspectReport {
        file: input.display().to_string(),
        dimensions: [raster.width, raster.height],
        band_count: raster.band_count(),
        percentiles: [lower, upper],
        bands: reports,
    })
}

pub fn cmd_inspect(
    input: PathBuf,
    bands: BandMapping,
    percentiles: (f32, f32),
    json: bool,
) -> Result<(), String> {
    let report = inspect_raster(&input, bands, percentiles)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    println!("File:       {}", report.file);
    println!(
        "Dimensions: {}x{}",
        report.dimensions[0], report.dimensions[1]
    );
    println!("Bands:      {}", report.band_count);
    println!(
        "\nSelected bands (clip at p{}/p{}):",
        report.percentiles[0], report.percentiles[1]
    );
    for band in &report.bands {
        let clip = band
            .clip
            .map(|[lo, hi]| format!("[{:.2}, {:.2}]", lo, hi))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "  {:<5} band {:>2}  raw [{}, {}]  clip {}",
            band.role, band.index, band.min, band.max, clip
        );
    }

    Ok(())
}

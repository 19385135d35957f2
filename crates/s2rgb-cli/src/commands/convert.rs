use std::path::{Path, PathBuf};
use std::time::Instant;

use log::warn;
use s2rgb_core::config::load_config;
use s2rgb_core::{run_batch, BatchSummary, FileOutcome};

use crate::types::ConvertOverrides;

/// Convert every `.tif` in `input_dir` into a thumbnail in `output_dir`.
///
/// Per-file failures are reported but do not make the command fail, unless
/// `strict` is set and nothing at all was converted.
pub fn cmd_convert(
    input_dir: PathBuf,
    output_dir: PathBuf,
    config_path: Option<PathBuf>,
    overrides: ConvertOverrides,
    strict: bool,
    silent: bool,
) -> Result<BatchSummary, String> {
    let batch_start = Instant::now();

    let handle = load_config(config_path.as_deref()).map_err(|e| e.to_string())?;
    for warning in &handle.warnings {
        warn!("Config warning: {}", warning);
    }
    if !silent {
        match &handle.source {
            Some(source) => println!("Using config from {}", source.display()),
            None => println!("Using built-in defaults"),
        }
    }

    let mut config = handle.config;
    overrides.apply(&mut config);
    config.validate().map_err(|e| e.to_string())?;

    let summary = run_batch(&input_dir, &output_dir, &config).map_err(|e| e.to_string())?;

    if !silent {
        print_summary(&summary, &output_dir, batch_start.elapsed().as_secs_f64());
    }

    if strict && summary.failed > 0 && summary.succeeded == 0 {
        return Err(format!(
            "All {} raster(s) failed to convert",
            summary.failed
        ));
    }

    Ok(summary)
}

fn print_summary(summary: &BatchSummary, output_dir: &Path, elapsed: f64) {
    println!("\n========================================");
    println!("BATCH COMPLETE");
    println!("========================================");
    println!("  Successful: {}", summary.succeeded);
    println!("  Failed:     {}", summary.failed);
    println!("  Skipped:    {}", summary.skipped);
    println!("  Output dir: {}", output_dir.display());
    println!("  Total time: {:.2}s", elapsed);

    if summary.failed > 0 {
        println!("\nErrors:");
        for outcome in summary.failures() {
            if let FileOutcome::Failed {
                input,
                stage,
                reason,
            } = outcome
            {
                println!("  {} (after {}): {}", input.display(), stage, reason);
            }
        }
    }
}

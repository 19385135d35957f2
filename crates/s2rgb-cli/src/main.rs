use clap::{Parser, Subcommand};
use s2rgb_cli::commands::{cmd_convert, cmd_init, cmd_inspect};
use s2rgb_cli::{
    init_logging, parse_bands, parse_format, parse_percentiles, parse_size, ConvertOverrides,
};
use s2rgb_core::BandMapping;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "s2rgb")]
#[command(version, about = "Sentinel-2 GeoTIFF to RGB thumbnail converter", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors and suppress the summary
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every .tif in a directory to an RGB thumbnail
    Convert {
        /// Directory containing the input rasters
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Directory receiving the thumbnails (created if missing)
        #[arg(value_name = "OUTPUT_DIR")]
        out: PathBuf,

        /// Configuration file (YAML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// 1-based band indices for red, green and blue
        #[arg(long, value_name = "R,G,B")]
        bands: Option<String>,

        /// Lower and upper clip percentiles
        #[arg(long, value_name = "LOW,HIGH")]
        percentiles: Option<String>,

        /// Thumbnail size
        #[arg(long, value_name = "WxH")]
        size: Option<String>,

        /// Suffix appended to the input file stem
        #[arg(long, value_name = "SUFFIX")]
        suffix: Option<String>,

        /// Output format (jpeg or png)
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,

        /// JPEG quality (1-100)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: Option<u8>,

        /// Exit with an error when every raster failed
        #[arg(long)]
        strict: bool,
    },

    /// Show band statistics and clip bounds for one raster
    Inspect {
        /// Raster file
        input: PathBuf,

        /// 1-based band indices for red, green and blue
        #[arg(long, value_name = "R,G,B", default_value = "4,3,2")]
        bands: String,

        /// Lower and upper clip percentiles
        #[arg(long, value_name = "LOW,HIGH", default_value = "2,98")]
        percentiles: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration file
    Init {
        /// Destination (defaults to the user config directory)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Convert {
            input,
            out,
            config,
            bands,
            percentiles,
            size,
            suffix,
            format,
            quality,
            strict,
        } => build_overrides(bands, percentiles, size, suffix, format, quality).and_then(
            |overrides| cmd_convert(input, out, config, overrides, strict, cli.quiet).map(|_| ()),
        ),

        Commands::Inspect {
            input,
            bands,
            percentiles,
            json,
        } => parse_bands(&bands).and_then(|bands: BandMapping| {
            let percentiles = parse_percentiles(&percentiles)?;
            cmd_inspect(input, bands, percentiles, json)
        }),

        Commands::Init { out, force } => cmd_init(out, force).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_overrides(
    bands: Option<String>,
    percentiles: Option<String>,
    size: Option<String>,
    suffix: Option<String>,
    format: Option<String>,
    quality: Option<u8>,
) -> Result<ConvertOverrides, String> {
    Ok(ConvertOverrides {
        bands: bands.as_deref().map(parse_bands).transpose()?,
        percentiles: percentiles.as_deref().map(parse_percentiles).transpose()?,
        size: size.as_deref().map(parse_size).transpose()?,
        suffix,
        format: format.as_deref().map(parse_format).transpose()?,
        jpeg_quality: quality,
    })
}

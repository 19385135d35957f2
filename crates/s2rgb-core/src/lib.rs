//! S2RGB Core Library
//!
//! Turns multi-band Sentinel-2 GeoTIFFs into fixed-size RGB preview
//! thumbnails using a percentile-clipped linear stretch per band.

pub mod compose;
pub mod config;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod models;
pub mod normalize;
pub mod pipeline;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{load_config, ThumbnailConfig};
pub use decoders::Raster;
pub use error::ThumbError;
pub use exporters::OutputFormat;
pub use models::{Band, BandMapping, BandRole, BandStats, BatchSummary, FileOutcome, FileStage};
pub use normalize::normalize;
pub use pipeline::{process_file, run_batch};

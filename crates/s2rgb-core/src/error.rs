//! Error types for thumbnail generation.

use std::path::PathBuf;

/// Everything that can go wrong while turning rasters into thumbnails.
///
/// `InputDir`, `OutputDir` and `Config` abort a batch before any file is
/// touched. The remaining variants are scoped to a single file and end up in
/// a [`crate::models::FileOutcome::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum ThumbError {
    #[error("cannot read input directory {}: {source}", .path.display())]
    InputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode raster: {0}")]
    Decode(String),

    #[error("band {index} requested but raster has {available} band(s)")]
    MissingBand { index: usize, available: usize },

    #[error("band dimensions differ: {expected:?} vs {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("band has no samples")]
    EmptyBand,

    #[error("invalid percentiles {lower}/{upper}: need 0 <= lower < upper <= 100")]
    InvalidPercentiles { lower: f32, upper: f32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

impl From<tiff::TiffError> for ThumbError {
    fn from(err: tiff::TiffError) -> Self {
        ThumbError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ThumbError>;

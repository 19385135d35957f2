//! Thumbnail configuration values, their defaults, and validation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThumbError};
use crate::exporters::{OutputFormat, DEFAULT_JPEG_QUALITY};
use crate::models::BandMapping;
use crate::normalize::{validate_percentiles, DEFAULT_LOWER_PERCENTILE, DEFAULT_UPPER_PERCENTILE};

/// Everything the batch pipeline needs to know besides the two directories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Semantic role to 1-based band index
    pub bands: BandMapping,
    pub percentiles: PercentileClip,
    pub output: OutputSettings,
}

/// Percentile clip bounds used by the band normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentileClip {
    pub lower: f32,
    pub upper: f32,
}

impl Default for PercentileClip {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_PERCENTILE,
            upper: DEFAULT_UPPER_PERCENTILE,
        }
    }
}

/// Size, naming and encoding of the written thumbnails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub width: u32,
    pub height: u32,
    /// Appended to the input stem, e.g. `scene` -> `scene_RGB.jpg`
    pub suffix: String,
    pub format: OutputFormat,
    /// Only used for JPEG output
    pub jpeg_quality: u8,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            suffix: "_RGB".to_string(),
            format: OutputFormat::Jpeg,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ThumbnailConfig {
    /// Check every value, reporting the first problem found.
    pub fn validate(&self) -> Result<()> {
        for (role, index) in [
            ("red", self.bands.red),
            ("green", self.bands.green),
            ("blue", self.bands.blue),
        ] {
            if index == 0 {
                return Err(ThumbError::Config(format!(
                    "{} band index must be >= 1 (band indices are 1-based)",
                    role
                )));
            }
        }

        validate_percentiles(self.percentiles.lower, self.percentiles.upper)
            .map_err(|e| ThumbError::Config(e.to_string()))?;

        if self.output.width == 0 || self.output.height == 0 {
            return Err(ThumbError::Config(format!(
                "output size must be non-zero, got {}x{}",
                self.output.width, self.output.height
            )));
        }

        if !(1..=100).contains(&self.output.jpeg_quality) {
            return Err(ThumbError::Config(format!(
                "jpeg_quality must be in 1..=100, got {}",
                self.output.jpeg_quality
            )));
        }

        if self.output.suffix.contains(['/', '\\']) {
            return Err(ThumbError::Config(format!(
                "output suffix must not contain path separators: {:?}",
                self.output.suffix
            )));
        }

        Ok(())
    }

    /// Render as YAML, in the same shape [`super::load_config`] reads.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ThumbError::Config(e.to_string()))
    }
}

//! Command-line overrides applied on top of the loaded configuration.

use s2rgb_core::{BandMapping, OutputFormat, ThumbnailConfig};

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct ConvertOverrides {
    pub bands: Option<BandMapping>,
    pub percentiles: Option<(f32, f32)>,
    pub size: Option<(u32, u32)>,
    pub suffix: Option<String>,
    pub format: Option<OutputFormat>,
    pub jpeg_quality: Option<u8>,
}

impl ConvertOverrides {
    /// Apply the overrides to `config` in place.
    pub fn apply(&self, config: &mut ThumbnailConfig) {
        if let Some(bands) = self.bands {
            config.bands = bands;
        }
        if let Some((lower, upper)) = self.percentiles {
            config.percentiles.lower = lower;
            config.percentiles.upper = upper;
        }
        if let Some((width, height)) = self.size {
            config.output.width = width;
            config.output.height = height;
        }
        if let Some(suffix) = &self.suffix {
            config.output.suffix = suffix.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(quality) = self.jpeg_quality {
            config.output.jpeg_quality = quality;
        }
    }
}

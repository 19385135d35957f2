//! Raster decoding.
//!
//! Multi-band GeoTIFFs are decoded into a [`Raster`] holding every sample
//! widened to `f32`; individual bands are then pulled out by their 1-based
//! index. Geographic metadata is ignored.

mod tiff;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::error::{Result, ThumbError};
use crate::models::Band;

/// Extensions treated as rasters during directory discovery.
pub const RASTER_EXTENSIONS: &[&str] = &["tif"];

/// How band samples are arranged in [`Raster::samples`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLayout {
    /// Pixel-interleaved: `b1 b2 .. bn b1 b2 .. bn ...`
    Chunky,
    /// One full plane per band, band 1 first
    Planar,
}

/// A decoded multi-band raster.
#[derive(Debug, Clone)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    band_count: usize,
    layout: SampleLayout,
    samples: Vec<f32>,
}

impl Raster {
    /// Open and fully decode a raster file.
    ///
    /// The file handle lives only for the duration of this call.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Decode a TIFF stream.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        tiff::decode_tiff(reader)
    }

    pub(crate) fn from_samples(
        width: u32,
        height: u32,
        layout: SampleLayout,
        samples: Vec<f32>,
    ) -> Result<Self> {
        let pixels = width as usize * height as usize;
        if pixels == 0 {
            return Err(ThumbError::Decode(format!(
                "raster has no pixels ({}x{})",
                width, height
            )));
        }
        if samples.len() % pixels != 0 {
            return Err(ThumbError::Decode(format!(
                "sample buffer of {} values does not divide into {}x{} pixels",
                samples.len(),
                width,
                height
            )));
        }

        Ok(Self {
            width,
            height,
            band_count: samples.len() / pixels,
            layout,
            samples,
        })
    }

    pub fn band_count(&self) -> usize {
        self.band_count
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Copy out band `index` (1-based).
    pub fn band(&self, index: usize) -> Result<Band> {
        if index == 0 || index > self.band_count {
            return Err(ThumbError::MissingBand {
                index,
                available: self.band_count,
            });
        }
        let offset = index - 1;
        let pixels = self.width as usize * self.height as usize;

        let data = match self.layout {
            SampleLayout::Chunky => self
                .samples
                .iter()
                .skip(offset)
                .step_by(self.band_count)
                .copied()
                .collect(),
            SampleLayout::Planar => self.samples[offset * pixels..(offset + 1) * pixels].to_vec(),
        };

        Ok(Band::new(self.width, self.height, data))
    }
}

/// Whether `path` names a raster we should process (case-insensitive `.tif`).
pub fn is_raster_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| RASTER_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

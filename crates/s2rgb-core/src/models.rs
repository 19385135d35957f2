//! Data models shared by the decoder, normalizer and batch pipeline.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Semantic role of a band in the composite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandRole {
    Red,
    Green,
    Blue,
}

impl BandRole {
    /// Roles in composite channel order.
    pub const ALL: [BandRole; 3] = [BandRole::Red, BandRole::Green, BandRole::Blue];

    pub fn name(self) -> &'static str {
        match self {
            BandRole::Red => "red",
            BandRole::Green => "green",
            BandRole::Blue => "blue",
        }
    }

    /// Single-letter tag used in diagnostic lines.
    pub fn tag(self) -> &'static str {
        match self {
            BandRole::Red => "R",
            BandRole::Green => "G",
            BandRole::Blue => "B",
        }
    }
}

/// Mapping from semantic role to 1-based band index in the raster.
///
/// The default is the Sentinel-2 layout: B4 = red, B3 = green, B2 = blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandMapping {
    pub red: usize,
    pub green: usize,
    pub blue: usize,
}

impl Default for BandMapping {
    fn default() -> Self {
        Self {
            red: 4,
            green: 3,
            blue: 2,
        }
    }
}

impl BandMapping {
    pub fn index(&self, role: BandRole) -> usize {
        match role {
            BandRole::Red => self.red,
            BandRole::Green => self.green,
            BandRole::Blue => self.blue,
        }
    }

    /// Indices in [red, green, blue] order.
    pub fn as_array(&self) -> [usize; 3] {
        [self.red, self.green, self.blue]
    }
}

/// A single spectral band: `width * height` samples in row-major order.
///
/// Samples keep their raw (sensor) values; only the storage type is widened.
#[derive(Debug, Clone)]
pub struct Band {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl Band {
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw value range over finite samples.
    pub fn stats(&self) -> BandStats {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut valid = 0usize;

        for &v in self.data.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            valid += 1;
        }

        if valid == 0 {
            return BandStats {
                min: f32::NAN,
                max: f32::NAN,
                valid,
            };
        }

        BandStats { min, max, valid }
    }
}

/// Raw min/max of a band. Diagnostic only, never used in computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandStats {
    pub min: f32,
    pub max: f32,
    /// Number of finite samples
    pub valid: usize,
}

impl fmt::Display for BandStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Where a file was in its processing when it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStage {
    Discovered,
    Opened,
    BandsRead,
    Normalized,
    Composited,
    Resized,
    Written,
}

impl fmt::Display for FileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileStage::Discovered => "discovered",
            FileStage::Opened => "opened",
            FileStage::BandsRead => "bands read",
            FileStage::Normalized => "normalized",
            FileStage::Composited => "composited",
            FileStage::Resized => "resized",
            FileStage::Written => "written",
        };
        f.write_str(name)
    }
}

/// Terminal state of one input file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Written {
        input: PathBuf,
        output: PathBuf,
    },
    Failed {
        input: PathBuf,
        /// Last stage that completed before the error
        stage: FileStage,
        reason: String,
    },
}

impl FileOutcome {
    pub fn input(&self) -> &PathBuf {
        match self {
            FileOutcome::Written { input, .. } | FileOutcome::Failed { input, .. } => input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Written { .. })
    }
}

/// Aggregated result of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Directory entries that were not `.tif` files
    pub skipped: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub(crate) fn record(&mut self, outcome: FileOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn outputs(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Written { output, .. } => Some(output),
            FileOutcome::Failed { .. } => None,
        })
    }
}

//! Percentile-clipped linear stretch of a raw band to 8 bits.
//!
//! `low`/`high` are taken at the requested percentiles of the band's finite
//! samples (linear interpolation between order statistics), every sample is
//! clipped to `[low, high]` and rescaled to `0..=255`.
//!
//! A band whose clip range collapses (`high == low`, e.g. a constant band)
//! becomes an all-black channel. Non-finite samples never take part in the
//! percentile estimate; NaN is written as 0 and infinities clip to the ends
//! of the range.

use image::GrayImage;
use log::debug;

use crate::error::{Result, ThumbError};
use crate::models::Band;

pub const DEFAULT_LOWER_PERCENTILE: f32 = 2.0;
pub const DEFAULT_UPPER_PERCENTILE: f32 = 98.0;

/// Value written for every pixel of a degenerate band.
pub const DEGENERATE_FILL: u8 = 0;

/// Stretch `band` to an 8-bit channel of the same dimensions.
pub fn normalize(band: &Band, lower_percentile: f32, upper_percentile: f32) -> Result<GrayImage> {
    validate_percentiles(lower_percentile, upper_percentile)?;
    if band.is_empty() {
        return Err(ThumbError::EmptyBand);
    }

    let data = match percentile_bounds(band, lower_percentile, upper_percentile) {
        Some((low, high)) if high > low => band
            .data
            .iter()
            .map(|&v| stretch_value(v, low, high))
            .collect(),
        bounds => {
            debug!(
                "Degenerate clip range {:?} for {}x{} band, filling with {}",
                bounds, band.width, band.height, DEGENERATE_FILL
            );
            vec![DEGENERATE_FILL; band.data.len()]
        }
    };

    GrayImage::from_raw(band.width, band.height, data).ok_or_else(|| {
        ThumbError::Decode(format!(
            "band buffer holds {} samples, expected {}x{}",
            band.data.len(),
            band.width,
            band.height
        ))
    })
}

/// `normalize` with the default 2nd/98th percentile clip.
pub fn normalize_default(band: &Band) -> Result<GrayImage> {
    normalize(band, DEFAULT_LOWER_PERCENTILE, DEFAULT_UPPER_PERCENTILE)
}

pub fn validate_percentiles(lower: f32, upper: f32) -> Result<()> {
    let in_range = |p: f32| (0.0..=100.0).contains(&p);
    if !in_range(lower) || !in_range(upper) || lower >= upper {
        return Err(ThumbError::InvalidPercentiles { lower, upper });
    }
    Ok(())
}

/// Clip bounds at the given percentiles, or `None` when the band has no
/// finite samples.
pub fn percentile_bounds(band: &Band, lower: f32, upper: f32) -> Option<(f32, f32)> {
    let mut sorted: Vec<f32> = band.data.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_unstable_by(f32::total_cmp);

    Some((percentile(&sorted, lower), percentile(&sorted, upper)))
}

/// Value at percentile `p` (0-100) of an ascending, non-empty slice.
///
/// Uses the rank `p / 100 * (n - 1)` and interpolates linearly between the
/// neighbouring order statistics.
pub fn percentile(sorted: &[f32], p: f32) -> f32 {
    debug_assert!(!sorted.is_empty());
    let last = sorted.len() - 1;
    let rank = (p.clamp(0.0, 100.0) as f64 / 100.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(last);
    let frac = rank - lo as f64;

    let a = sorted[lo] as f64;
    let b = sorted[hi] as f64;
    (a + (b - a) * frac) as f32
}

/// Map one raw sample into `0..=255` given clip bounds with `high > low`.
#[inline]
pub fn stretch_value(value: f32, low: f32, high: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let clipped = value.clamp(low, high) as f64;
    let scaled = (clipped - low as f64) / (high as f64 - low as f64) * 255.0;
    scaled.round().clamp(0.0, 255.0) as u8
}

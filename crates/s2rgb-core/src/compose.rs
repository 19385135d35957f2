//! Channel stacking and thumbnail resizing.

use image::imageops::{self, FilterType};
use image::{GrayImage, Rgb, RgbImage};
use log::debug;

use crate::error::{Result, ThumbError};

/// Stack three 8-bit channels into one RGB image.
///
/// Channel 0 of every output pixel comes from `red`, 1 from `green` and 2
/// from `blue`.
pub fn compose_rgb(red: &GrayImage, green: &GrayImage, blue: &GrayImage) -> Result<RgbImage> {
    let expected = red.dimensions();
    for channel in [green, blue] {
        if channel.dimensions() != expected {
            return Err(ThumbError::DimensionMismatch {
                expected,
                actual: channel.dimensions(),
            });
        }
    }

    let (width, height) = expected;
    Ok(RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            red.get_pixel(x, y)[0],
            green.get_pixel(x, y)[0],
            blue.get_pixel(x, y)[0],
        ])
    }))
}

/// Resample to exactly `width x height` with Lanczos3, ignoring aspect ratio.
pub fn resize_exact(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.dimensions() == (width, height) {
        debug!("Image already at {}x{}, skipping resize", width, height);
        return image.clone();
    }

    debug!(
        "Resizing {}x{} -> {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );
    imageops::resize(image, width, height, FilterType::Lanczos3)
}

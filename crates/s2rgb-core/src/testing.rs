//! Synthetic raster fixtures for unit tests.

use std::io::Cursor;
use std::path::Path;

use tiff::encoder::{colortype, TiffEncoder};

/// Sample value of band `b` (0-based) at pixel (x, y) in [`four_band_tiff`].
///
/// Each band gets its own gradient so channel order can be checked.
pub(crate) fn fixture_sample(b: usize, x: u32, y: u32) -> u16 {
    match b {
        0 => 100 + (x * 7 % 500) as u16,
        1 => 3000 - (y * 5 % 1000) as u16,
        2 => 200 + ((x + y) * 3 % 800) as u16,
        _ => 1000 + (x * 11 % 2000) as u16 + (y % 3) as u16 * 100,
    }
}

/// Encode a 4-band, 16-bit TIFF of the given size.
pub(crate) fn four_band_tiff(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            for b in 0..4 {
                data.push(fixture_sample(b, x, y));
            }
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    TiffEncoder::new(&mut cursor)
        .unwrap()
        .write_image::<colortype::CMYK16>(width, height, &data)
        .unwrap();
    cursor.into_inner()
}

/// Encode a single-band 16-bit TIFF.
pub(crate) fn gray_tiff(width: u32, height: u32) -> Vec<u8> {
    let data: Vec<u16> = (0..width * height).map(|i| (i % 4096) as u16).collect();
    let mut cursor = Cursor::new(Vec::new());
    TiffEncoder::new(&mut cursor)
        .unwrap()
        .write_image::<colortype::Gray16>(width, height, &data)
        .unwrap();
    cursor.into_inner()
}

pub(crate) fn write_four_band_tiff(path: &Path, width: u32, height: u32) {
    std::fs::write(path, four_band_tiff(width, height)).unwrap();
}

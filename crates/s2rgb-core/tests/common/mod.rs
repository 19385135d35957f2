//! Shared fixtures for integration tests.
//!
//! Each test file compiles its own copy of this module, so some items look
//! unused from any single file.

#![allow(dead_code)]

pub mod log_capture;
pub mod multiband;

use std::io::Cursor;
use std::path::Path;

use tiff::encoder::{colortype, TiffEncoder};

/// Write a 4-band 16-bit raster with reflectance-like values.
///
/// Band 4 ramps left to right, band 3 top to bottom and band 2 diagonally,
/// with a few hot pixels so the percentile clip has outliers to cut.
pub fn write_scene(path: &Path, width: u32, height: u32) {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let hot = (x * 31 + y * 17) % 997 == 0;
            let band1 = 500 + (x + y) as u16 % 50;
            let band2 = 300 + ((x + y) * 2000 / (width + height)) as u16;
            let band3 = 200 + (y * 3000 / height) as u16;
            let band4 = if hot {
                u16::MAX
            } else {
                100 + (x * 4000 / width) as u16
            };
            data.extend_from_slice(&[band1, band2, band3, band4]);
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    TiffEncoder::new(&mut cursor)
        .unwrap()
        .write_image::<colortype::CMYK16>(width, height, &data)
        .unwrap();
    std::fs::write(path, cursor.into_inner()).unwrap();
}

/// Write a file that starts like a TIFF but is cut short.
pub fn write_truncated(path: &Path) {
    let dir = tempfile::tempdir().unwrap();
    let full = dir.path().join("full.tif");
    write_scene(&full, 64, 64);
    let mut bytes = std::fs::read(&full).unwrap();
    bytes.truncate(bytes.len() / 4);
    std::fs::write(path, bytes).unwrap();
}

//! Hand-encoded MinIsBlack rasters with any number of float32 bands.
//!
//! The `tiff` encoder has no colour type for more than four grey samples and
//! only writes pixel-interleaved data, so these files are laid out by hand
//! (little-endian, uncompressed, striped).

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// PlanarConfiguration = 1
    Chunky,
    /// PlanarConfiguration = 2
    Planar,
}

/// Value of band `band` (0-based) at (x, y).
pub fn sample(band: usize, x: u32, y: u32, width: u32) -> f32 {
    (band as f32 + 1.0) * 1000.0 + (y * width + x) as f32 + 0.25
}

/// Every value of band `band` (0-based) in row-major order.
pub fn expected_band(band: usize, width: u32, height: u32) -> Vec<f32> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| sample(band, x, y, width)))
        .collect()
}

const SHORT: u16 = 3;
const LONG: u16 = 4;

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    bytes: Vec<u8>,
}

impl Entry {
    fn shorts(tag: u16, values: &[u16]) -> Self {
        Self {
            tag,
            kind: SHORT,
            count: values.len() as u32,
            bytes: values.iter().flat_map(|v| v.to_le_bytes()).collect(),
        }
    }

    fn longs(tag: u16, values: &[u32]) -> Self {
        Self {
            tag,
            kind: LONG,
            count: values.len() as u32,
            bytes: values.iter().flat_map(|v| v.to_le_bytes()).collect(),
        }
    }
}

/// Encode a `bands`-band float32 raster split into strips of
/// `rows_per_strip` rows.
pub fn multiband_tiff(
    width: u32,
    height: u32,
    bands: usize,
    layout: Layout,
    rows_per_strip: u32,
) -> Vec<u8> {
    let row_starts: Vec<u32> = (0..height).step_by(rows_per_strip as usize).collect();

    let mut strips: Vec<Vec<u8>> = Vec::new();
    match layout {
        Layout::Chunky => {
            for &y0 in &row_starts {
                let mut strip = Vec::new();
                for y in y0..(y0 + rows_per_strip).min(height) {
                    for x in 0..width {
                        for b in 0..bands {
                            strip.extend_from_slice(&sample(b, x, y, width).to_le_bytes());
                        }
                    }
                }
                strips.push(strip);
            }
        }
        Layout::Planar => {
            for b in 0..bands {
                for &y0 in &row_starts {
                    let mut strip = Vec::new();
                    for y in y0..(y0 + rows_per_strip).min(height) {
                        for x in 0..width {
                            strip.extend_from_slice(&sample(b, x, y, width).to_le_bytes());
                        }
                    }
                    strips.push(strip);
                }
            }
        }
    }

    let planar_config = match layout {
        Layout::Chunky => 1,
        Layout::Planar => 2,
    };
    let byte_counts: Vec<u32> = strips.iter().map(|s| s.len() as u32).collect();

    let mut entries = vec![
        Entry::longs(256, &[width]),
        Entry::longs(257, &[height]),
        Entry::shorts(258, &vec![32u16; bands]),
        Entry::shorts(259, &[1]),
        Entry::shorts(262, &[1]),
        Entry::longs(273, &vec![0u32; strips.len()]),
        Entry::shorts(277, &[bands as u16]),
        Entry::longs(278, &[rows_per_strip]),
        Entry::longs(279, &byte_counts),
        Entry::shorts(284, &[planar_config]),
        Entry::shorts(339, &vec![3u16; bands]),
    ];

    // Out-of-line values follow the IFD, image data follows them
    let ifd_len = 2 + 12 * entries.len() as u32 + 4;
    let mut cursor = 8 + ifd_len;
    let mut value_offsets = Vec::with_capacity(entries.len());
    for entry in &entries {
        if entry.bytes.len() > 4 {
            value_offsets.push(Some(cursor));
            cursor += entry.bytes.len() as u32;
        } else {
            value_offsets.push(None);
        }
    }

    let mut strip_offsets = Vec::with_capacity(strips.len());
    for strip in &strips {
        strip_offsets.push(cursor);
        cursor += strip.len() as u32;
    }
    entries[5] = Entry::longs(273, &strip_offsets);

    let mut out = Vec::with_capacity(cursor as usize);
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());

    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for (entry, offset) in entries.iter().zip(&value_offsets) {
        out.extend_from_slice(&entry.tag.to_le_bytes());
        out.extend_from_slice(&entry.kind.to_le_bytes());
        out.extend_from_slice(&entry.count.to_le_bytes());
        match offset {
            Some(offset) => out.extend_from_slice(&offset.to_le_bytes()),
            None => {
                let mut inline = [0u8; 4];
                inline[..entry.bytes.len()].copy_from_slice(&entry.bytes);
                out.extend_from_slice(&inline);
            }
        }
    }
    out.extend_from_slice(&0u32.to_le_bytes());

    for (entry, offset) in entries.iter().zip(&value_offsets) {
        if offset.is_some() {
            out.extend_from_slice(&entry.bytes);
        }
    }
    for strip in &strips {
        out.extend_from_slice(strip);
    }

    debug_assert_eq!(out.len(), cursor as usize);
    out
}

pub fn write_multiband(
    path: &Path,
    width: u32,
    height: u32,
    bands: usize,
    layout: Layout,
    rows_per_strip: u32,
) {
    std::fs::write(
        path,
        multiband_tiff(width, height, bands, layout, rows_per_strip),
    )
    .unwrap();
}

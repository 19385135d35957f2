//! TIFF raster decoder

use std::io::{Read, Seek};

use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;

use super::{Raster, SampleLayout};
use crate::error::{Result, ThumbError};

/// Decode the first image of a TIFF stream into a [`Raster`].
pub(crate) fn decode_tiff<R: Read + Seek>(reader: R) -> Result<Raster> {
    // Full Sentinel-2 tiles with all bands easily exceed the default limits
    let mut limits = Limits::default();
    limits.decoding_buffer_size = 1024 * 1024 * 1024;
    limits.ifd_value_size = 1024 * 1024 * 1024;
    limits.intermediate_buffer_size = 1024 * 1024 * 1024;

    let mut decoder = Decoder::new(reader)?.with_limits(limits);

    let (width, height) = decoder.dimensions()?;

    // PlanarConfiguration: 1 = chunky (default), 2 = planar
    let planar = read_u16_tag(&mut decoder, Tag::PlanarConfiguration)?;

    let (layout, samples) = if planar == Some(2) {
        let bands = read_u16_tag(&mut decoder, Tag::SamplesPerPixel)?.unwrap_or(1);
        (
            SampleLayout::Planar,
            read_planes(&mut decoder, width, height, bands as usize)?,
        )
    } else {
        (SampleLayout::Chunky, widen_result(decoder.read_image()?))
    };

    Raster::from_samples(width, height, layout, samples).map_err(|e| match e {
        ThumbError::Decode(msg) => ThumbError::Decode(format!("TIFF {}", msg)),
        other => other,
    })
}

fn read_u16_tag<R: Read + Seek>(decoder: &mut Decoder<R>, tag: Tag) -> Result<Option<u16>> {
    Ok(decoder
        .find_tag(tag)?
        .map(|value| value.into_u16())
        .transpose()?)
}

/// Read a band-sequential image one chunk at a time.
///
/// `read_image` only returns the first plane of such files. Chunks are stored
/// plane by plane, each plane split into strips or tiles in row-major order,
/// and are copied into place so the result holds one full plane per band.
fn read_planes<R: Read + Seek>(
    decoder: &mut Decoder<R>,
    width: u32,
    height: u32,
    bands: usize,
) -> Result<Vec<f32>> {
    let pixels = width as usize * height as usize;
    if pixels == 0 {
        return Err(ThumbError::Decode(format!(
            "raster has no pixels ({}x{})",
            width, height
        )));
    }

    let (chunk_width, chunk_height) = decoder.chunk_dimensions();
    if chunk_width == 0 || chunk_height == 0 {
        return Err(ThumbError::Decode(format!(
            "TIFF chunk size {}x{} is empty",
            chunk_width, chunk_height
        )));
    }

    let across = width.div_ceil(chunk_width);
    let down = height.div_ceil(chunk_height);
    let chunks_per_plane = across * down;
    let mut samples = vec![0.0f32; pixels * bands];

    for (plane_index, plane) in samples.chunks_exact_mut(pixels).enumerate() {
        for chunk_index in 0..chunks_per_plane {
            let global = plane_index as u32 * chunks_per_plane + chunk_index;
            let chunk = widen_result(decoder.read_chunk(global)?);

            let x0 = (chunk_index % across) * chunk_width;
            let y0 = (chunk_index / across) * chunk_height;
            let cols = chunk_width.min(width - x0) as usize;
            let rows = chunk_height.min(height - y0) as usize;
            // Edge tiles may come back padded to the full chunk size
            let stride = if chunk.len() >= chunk_width as usize * chunk_height as usize {
                chunk_width as usize
            } else {
                cols
            };
            if chunk.len() < stride * (rows - 1) + cols {
                return Err(ThumbError::Decode(format!(
                    "TIFF chunk {} holds {} samples, expected {}x{}",
                    global,
                    chunk.len(),
                    cols,
                    rows
                )));
            }

            for row in 0..rows {
                let src = &chunk[row * stride..row * stride + cols];
                let start = (y0 as usize + row) * width as usize + x0 as usize;
                plane[start..start + cols].copy_from_slice(src);
            }
        }
    }

    Ok(samples)
}

fn widen_result(result: DecodingResult) -> Vec<f32> {
    match result {
        DecodingResult::U8(buf) => widen(&buf),
        DecodingResult::U16(buf) => widen(&buf),
        DecodingResult::U32(buf) => widen(&buf),
        DecodingResult::U64(buf) => widen(&buf),
        DecodingResult::I8(buf) => widen(&buf),
        DecodingResult::I16(buf) => widen(&buf),
        DecodingResult::I32(buf) => widen(&buf),
        DecodingResult::I64(buf) => widen(&buf),
        DecodingResult::F16(buf) => buf.iter().map(|v| v.to_f32()).collect(),
        DecodingResult::F32(buf) => buf,
        DecodingResult::F64(buf) => widen(&buf),
    }
}

/// TIFF sample types that can be carried as `f32`.
///
/// Values keep their magnitude; 32/64-bit integers lose precision above 2^24.
trait TiffSample: Copy {
    fn to_f32(self) -> f32;
}

macro_rules! impl_tiff_sample {
    ($($t:ty),*) => {
        $(
            impl TiffSample for $t {
                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }
            }
        )*
    };
}

impl_tiff_sample!(u8, u16, u32, u64, i8, i16, i32, i64, f64);

fn widen<T: TiffSample>(buf: &[T]) -> Vec<f32> {
    buf.iter().map(|&v| v.to_f32()).collect()
}

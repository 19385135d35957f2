//! Thumbnail encoders
//!
//! Encode the final RGB thumbnail to JPEG or PNG and put it on disk.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default JPEG quality (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Compressed output format for thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// Encode `image` into an in-memory buffer.
pub fn encode_thumbnail(image: &RgbImage, format: OutputFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    match format {
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, jpeg_quality);
            image.write_with_encoder(encoder)?;
        }
        OutputFormat::Png => {
            let encoder = PngEncoder::new(&mut buf);
            image.write_with_encoder(encoder)?;
        }
    }
    Ok(buf.into_inner())
}

/// Encode and write a thumbnail to `path`, replacing any existing file.
///
/// The bytes go to a `.part` sibling first and are renamed into place, so a
/// failure never leaves a truncated thumbnail at `path`.
pub fn export_thumbnail<P: AsRef<Path>>(
    image: &RgbImage,
    path: P,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_thumbnail(image, format, jpeg_quality)?;

    let partial = partial_path(path);
    if let Err(err) = fs::write(&partial, &bytes).and_then(|_| fs::rename(&partial, path)) {
        let _ = fs::remove_file(&partial);
        return Err(err.into());
    }

    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

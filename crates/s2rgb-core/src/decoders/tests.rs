//! Tests for raster decoding

use std::io::Cursor;
use std::path::Path;

use super::*;
use crate::testing::{fixture_sample, four_band_tiff, gray_tiff};

#[test]
fn test_decode_four_band_tiff() {
    let raster = Raster::from_reader(Cursor::new(four_band_tiff(40, 30))).unwrap();

    assert_eq!(raster.dimensions(), (40, 30));
    assert_eq!(raster.band_count(), 4);
}

#[test]
fn test_band_extraction_is_one_based() {
    let raster = Raster::from_reader(Cursor::new(four_band_tiff(16, 8))).unwrap();

    for index in 1..=4 {
        let band = raster.band(index).unwrap();
        assert_eq!(band.dimensions(), (16, 8));
        assert_eq!(band.data.len(), 16 * 8);
        // pixel (5, 3)
        let value = band.data[(3 * 16 + 5) as usize];
        assert_eq!(value, fixture_sample(index - 1, 5, 3) as f32);
    }
}

#[test]
fn test_missing_band_index() {
    let raster = Raster::from_reader(Cursor::new(four_band_tiff(4, 4))).unwrap();

    assert!(matches!(
        raster.band(5),
        Err(ThumbError::MissingBand {
            index: 5,
            available: 4
        })
    ));
    assert!(matches!(raster.band(0), Err(ThumbError::MissingBand { .. })));
}

#[test]
fn test_single_band_raster_has_no_band_four() {
    let raster = Raster::from_reader(Cursor::new(gray_tiff(10, 10))).unwrap();

    assert_eq!(raster.band_count(), 1);
    assert!(raster.band(1).is_ok());
    assert!(raster.band(4).is_err());
}

#[test]
fn test_decode_garbage_fails() {
    let result = Raster::from_reader(Cursor::new(b"definitely not a tiff".to_vec()));
    assert!(matches!(result, Err(ThumbError::Decode(_))));
}

#[test]
fn test_decode_truncated_tiff_fails() {
    let mut bytes = four_band_tiff(64, 64);
    bytes.truncate(bytes.len() / 3);
    assert!(Raster::from_reader(Cursor::new(bytes)).is_err());
}

#[test]
fn test_open_missing_file_is_io_error() {
    let result = Raster::open("/nonexistent/scene.tif");
    assert!(matches!(result, Err(ThumbError::Io(_))));
}

#[test]
fn test_planar_layout_band_extraction() {
    // 2x2 raster, 3 planes
    let samples = vec![
        1.0, 2.0, 3.0, 4.0, // band 1
        10.0, 20.0, 30.0, 40.0, // band 2
        100.0, 200.0, 300.0, 400.0, // band 3
    ];
    let raster = Raster::from_samples(2, 2, SampleLayout::Planar, samples).unwrap();

    assert_eq!(raster.band_count(), 3);
    assert_eq!(raster.band(2).unwrap().data, vec![10.0, 20.0, 30.0, 40.0]);
}

#[test]
fn test_chunky_layout_band_extraction() {
    let samples = vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0];
    let raster = Raster::from_samples(3, 1, SampleLayout::Chunky, samples).unwrap();

    assert_eq!(raster.band_count(), 2);
    assert_eq!(raster.band(1).unwrap().data, vec![1.0, 2.0, 3.0]);
    assert_eq!(raster.band(2).unwrap().data, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_sample_count_mismatch_rejected() {
    let result = Raster::from_samples(2, 2, SampleLayout::Chunky, vec![0.0; 7]);
    assert!(matches!(result, Err(ThumbError::Decode(_))));
}

#[test]
fn test_is_raster_path() {
    assert!(is_raster_path(Path::new("scene.tif")));
    assert!(is_raster_path(Path::new("dir/SCENE.TIF")));
    assert!(is_raster_path(Path::new("scene.Tif")));
    assert!(!is_raster_path(Path::new("scene.tiff")));
    assert!(!is_raster_path(Path::new("notes.txt")));
    assert!(!is_raster_path(Path::new("tif")));
}

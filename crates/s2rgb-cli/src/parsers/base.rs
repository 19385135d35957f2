//! Parsers for band, percentile and size arguments.

use s2rgb_core::BandMapping;

/// Parse a band mapping in format "R,G,B" (1-based band indices)
///
/// # Arguments
/// * `bands_str` - A string like "4,3,2"
///
/// # Returns
/// A [`BandMapping`] with the red, green and blue indices
pub fn parse_bands(bands_str: &str) -> Result<BandMapping, String> {
    let parts: Vec<&str> = bands_str.split(',').collect();
    if parts.len() != 3 {
        return Err(format!(
            "Bands must be in format R,G,B (e.g., 4,3,2), got: {}",
            bands_str
        ));
    }

    let mut indices = [0usize; 3];
    for ((slot, part), name) in indices.iter_mut().zip(&parts).zip(["red", "green", "blue"]) {
        let index = part
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid {} band index: {}", name, part))?;
        if index == 0 {
            return Err(format!(
                "{} band index must be >= 1 (bands are 1-based)",
                name
            ));
        }
        *slot = index;
    }

    Ok(BandMapping {
        red: indices[0],
        green: indices[1],
        blue: indices[2],
    })
}

/// Parse percentile clip bounds in format "LOW,HIGH"
///
/// Both values must be in 0-100 with LOW < HIGH.
pub fn parse_percentiles(percentiles_str: &str) -> Result<(f32, f32), String> {
    let (low, high) = percentiles_str.split_once(',').ok_or_else(|| {
        format!(
            "Percentiles must be in format LOW,HIGH (e.g., 2,98), got: {}",
            percentiles_str
        )
    })?;

    let low = low
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("Invalid lower percentile: {}", low))?;
    let high = high
        .trim()
        .parse::<f32>()
        .map_err(|_| format!("Invalid upper percentile: {}", high))?;

    if !(0.0..=100.0).contains(&low) || !(0.0..=100.0).contains(&high) || low >= high {
        return Err(format!(
            "Percentiles must satisfy 0 <= LOW < HIGH <= 100, got: {},{}",
            low, high
        ));
    }

    Ok((low, high))
}

/// Parse an output size in format "WIDTHxHEIGHT" (a single number means square)
pub fn parse_size(size_str: &str) -> Result<(u32, u32), String> {
    let lower = size_str.trim().to_lowercase();
    let (w, h) = lower.split_once('x').unwrap_or((lower.as_str(), lower.as_str()));

    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid width: {}", w))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid height: {}", h))?;

    if width == 0 || height == 0 {
        return Err(format!("Size must be non-zero, got: {}", size_str));
    }

    Ok((width, height))
}

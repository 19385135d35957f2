//! Parsers for output encoding options.

use s2rgb_core::OutputFormat;

/// Parse an output format name ("jpeg", "jpg" or "png")
pub fn parse_format(format_str: &str) -> Result<OutputFormat, String> {
    match format_str.trim().to_lowercase().as_str() {
        "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
        "png" => Ok(OutputFormat::Png),
        other => Err(format!(
            "Unknown output format '{}'. Valid options: jpeg, png",
            other
        )),
    }
}

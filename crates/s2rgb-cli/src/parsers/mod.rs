//! Parsing functions for CLI arguments.

mod base;
mod output;

pub use base::{parse_bands, parse_percentiles, parse_size};
pub use output::parse_format;

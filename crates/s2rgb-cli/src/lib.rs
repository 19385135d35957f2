//! Shared utilities for s2rgb-cli
//!
//! Argument parsers and command implementations, kept in a library so they
//! can be tested without spawning the binary.

pub mod commands;
pub mod logging;
pub mod parsers;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use logging::init_logging;
pub use parsers::{parse_bands, parse_format, parse_percentiles, parse_size};
pub use types::ConvertOverrides;

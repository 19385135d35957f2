//! Type definitions for CLI commands.

mod params;

pub use params::ConvertOverrides;

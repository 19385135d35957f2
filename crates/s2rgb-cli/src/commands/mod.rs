//! Command implementations for the s2rgb CLI.

mod convert;
mod init;
mod inspect;

pub use convert::cmd_convert;
pub use init::cmd_init;
pub use inspect::{cmd_inspect, inspect_raster, BandReport, InspectReport};

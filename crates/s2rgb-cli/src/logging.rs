//! Logger setup for the CLI.

use env_logger::Env;

/// Initialise `env_logger`.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output and
/// `quiet` limits output to errors.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_target(false)
        .format_timestamp(None)
        .try_init();
}

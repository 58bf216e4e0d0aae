//! Logger initialization for the demo binaries

use env_logger::Env;

/// Initialize the process-wide logger
///
/// Honors `RUST_LOG`; defaults to `info` so the demos narrate what they do.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

//! Logging setup for the `forward` binary.

use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Install a compact fmt subscriber writing to stderr.
///
/// Debug builds log at DEBUG, release builds at INFO. Stdout is left for the
/// layer outputs.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

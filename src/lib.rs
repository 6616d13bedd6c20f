pub mod annotate;
pub mod config;
pub mod locale;

pub use annotate::{Annotator, Emotion, Motion, ParsedResponse};
pub use locale::{KeywordTable, Locale};

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `info`).
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

//! Logger bootstrap shared by binaries and tools.
//!
//! The crate itself only speaks through the `log` facade; this module wires
//! the `env_logger` backend for executables that want the default setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend once.
///
/// `filter` overrides the environment when given (env_logger syntax, e.g.
/// "info" or "pantin_scene=debug"); otherwise `RUST_LOG` is honored, falling
/// back to info level. Idempotent — call early in `main`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }
        builder.init();
        log::debug!("logging initialized");
    });
}

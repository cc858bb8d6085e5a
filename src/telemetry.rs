//! Optional subscriber setup for binaries embedding the engine.
//! Filter comes from `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global fmt subscriber. Returns false if one was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).try_init().is_ok()
}

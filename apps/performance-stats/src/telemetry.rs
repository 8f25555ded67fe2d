//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; binaries and tests that want to
//! see them call [`init_tracing`] once at startup.
//!
//! # Configuration
//!
//! - `RUST_LOG`: standard `EnvFilter` directives (default: `info`)
//! - `LOG_ANSI`: set to `false` to disable coloured output
//!
//! # Usage
//!
//! ```rust,ignore
//! use performance_stats::telemetry::init_tracing;
//!
//! init_tracing();
//! ```

use tracing_subscriber::EnvFilter;

/// Install a console `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, so repeated
/// calls are harmless.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let ansi = std::env::var("LOG_ANSI")
        .map(|v| v != "false")
        .unwrap_or(true);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(ansi)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Tracing initialized");
    }

    installed
}

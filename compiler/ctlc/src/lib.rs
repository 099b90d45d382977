//! Library side of the `ctl` command-line driver.
//!
//! Commands return their output instead of printing it, so they can be
//! tested without spawning the binary.

pub mod commands;

use std::sync::Once;

use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber, once.
///
/// - `CTL_TRACE_TREE` set: hierarchical output, filtered by `RUST_LOG`
///   (default `ctl_parse=trace`).
/// - otherwise `RUST_LOG` set: flat output with targets and levels.
/// - neither: no subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("CTL_TRACE_TREE").is_some() {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ctl_parse=trace"));
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
        debug!("tracing initialized");
    });
}

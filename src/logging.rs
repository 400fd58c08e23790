//! Process-default logging sink
//!
//! The store and sessions emit `tracing` events. An application that wants
//! its own sink injects it through [`init_with`] before first use; otherwise
//! [`init`] lazily installs a formatted subscriber filtered by `RUST_LOG`,
//! defaulting to `info`.

use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the process-default subscriber, once.
///
/// A no-op if any subscriber (including an externally injected one) is
/// already installed.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

/// Install an externally constructed subscriber as the process-wide sink.
///
/// This is the explicit injection point: call it before any store operation
/// and subsequent [`init`] calls are no-ops. Returns false if a sink is
/// already installed (the new subscriber is dropped; the process keeps the
/// existing one).
pub fn init_with<S>(subscriber: S) -> bool
where
    S: Subscriber + Send + Sync + 'static,
{
    let installed = tracing::subscriber::set_global_default(subscriber).is_ok();
    if installed {
        // Consume the lazy path so init() never races a second install.
        INIT.call_once(|| {});
    }
    installed
}

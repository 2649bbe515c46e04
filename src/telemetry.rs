//! Tracing setup helpers for hosts embedding `ledger-chart`.
//!
//! Chart model builders emit `debug!`/`trace!` events (strategy selection,
//! primitive counts). Nothing here is initialized implicitly: hosts either
//! call [`init_default_tracing`] or install their own subscriber.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Only available with the `telemetry` feature; without it this is a no-op.
/// Returns `true` when a subscriber was actually installed, `false` when the
/// feature is disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

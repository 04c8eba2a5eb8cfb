//! Opt-in tracing setup for hosts embedding `dashplot`.
//!
//! Chart render paths emit `tracing` debug/trace events (skipped renders,
//! projected geometry counts). Nothing is installed implicitly: hosts either
//! call [`init_default_tracing`] or wire their own subscriber.

/// Installs a compact global subscriber when built with the `telemetry`
/// feature. `RUST_LOG` overrides the default `dashplot=debug` filter.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set, so calling it from library consumers is always safe.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("dashplot=debug"));

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

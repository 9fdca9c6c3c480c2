//! Telemetry helpers for hosts embedding the chart presenters.
//!
//! Tracing setup stays explicit and opt-in: call `init_default_tracing` or
//! install your own `tracing` subscriber. The `render_result_charts` binary
//! calls it at startup, so with the `telemetry` feature `RUST_LOG=debug`
//! shows presenter lifecycle and import warnings on stderr while the
//! snapshot JSON goes to the output file.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

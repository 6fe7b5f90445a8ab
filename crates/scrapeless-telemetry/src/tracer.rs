//! Tracer setup and management

use crate::attributes::SYSTEM_NAME;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::TracerProvider;
use std::sync::{Arc, OnceLock};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Global tracer provider holder
static TRACER_PROVIDER: OnceLock<Arc<TracerProvider>> = OnceLock::new();

/// Options for [`init_telemetry_with`]
#[derive(Debug, Clone, Default)]
pub struct TelemetryOptions {
    /// Tracer name, defaults to `scrapeless`
    pub service_name: Option<String>,
    /// Emit JSON log lines instead of the human-readable format
    pub json_logs: bool,
}

/// Initialize telemetry with default options.
///
/// # Example
///
/// ```rust,no_run
/// use scrapeless_telemetry::init_telemetry;
///
/// init_telemetry();
/// ```
pub fn init_telemetry() {
    init_telemetry_with(TelemetryOptions::default());
}

/// Initialize telemetry with OpenTelemetry support.
///
/// This sets up:
/// - A tracer provider named after the service
/// - Integration with the tracing subscriber
/// - Structured logging output filtered by `RUST_LOG` (default `info`)
///
/// Calling it more than once is harmless; only the first call installs a subscriber.
pub fn init_telemetry_with(options: TelemetryOptions) {
    let tracer_provider = TracerProvider::builder().build();

    let service_name = options
        .service_name
        .unwrap_or_else(|| SYSTEM_NAME.to_string());
    let tracer = tracer_provider.tracer(service_name);

    let _ = TRACER_PROVIDER.set(Arc::new(tracer_provider));

    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    let (plain_layer, json_layer) = if options.json_logs {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_line_number(true),
            ),
            None,
        )
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(telemetry_layer)
        .with(plain_layer)
        .with(json_layer)
        .with(filter)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed, keeping it");
    }
}

/// Get the global tracer provider if initialized
pub fn tracer_provider() -> Option<Arc<TracerProvider>> {
    TRACER_PROVIDER.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_telemetry();
        init_telemetry_with(TelemetryOptions {
            service_name: Some("second".into()),
            json_logs: true,
        });
        assert!(tracer_provider().is_some());
    }
}

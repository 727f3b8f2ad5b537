use anyhow::{Context, Result};
use opentelemetry::{
    runtime,
    sdk::{trace, Resource},
};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_semantic_conventions::resource::SERVICE_NAME;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

use crate::settings::Tracing;

/// Install the global tracing subscriber. Logs always go to stdout and spans are additionally
/// exported through OTLP if an endpoint is configured.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(settings: &Tracing) -> Result<()> {
    let filter = env_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        &settings.filter,
    )?;

    let tracer = settings
        .otlp_endpoint
        .as_ref()
        .map(|endpoint| {
            opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(
                    opentelemetry_otlp::new_exporter()
                        .tonic()
                        .with_endpoint(endpoint.as_str()),
                )
                .with_trace_config(trace::config().with_resource(Resource::new([
                    SERVICE_NAME.string(env!("CARGO_PKG_NAME")),
                ])))
                .install_batch(runtime::Tokio)
        })
        .transpose()
        .context("failed setting up OTLP exporter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_span_events(FmtSpan::CLOSE))
        .with(tracer.map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer)))
        .try_init()?;

    Ok(())
}

/// Build the log filter from the `RUST_LOG` directives if they are set and valid, falling back to
/// the configured ones otherwise.
fn env_filter(env: Option<&str>, configured: &str) -> Result<EnvFilter> {
    if let Some(filter) = env.and_then(|env| EnvFilter::try_new(env).ok()) {
        return Ok(filter);
    }

    EnvFilter::try_new(configured).context("invalid tracing filter")
}

/// Flush all pending spans and stop the exporter.
pub fn shutdown() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter() {
        let filter = env_filter(None, "info,geek_university=trace").unwrap();

        assert!(filter.to_string().contains("geek_university=trace"));
    }

    #[test]
    fn invalid_configured_filter() {
        let err = env_filter(None, "geek_university=loud").unwrap_err();

        assert_eq!("invalid tracing filter", err.to_string());
    }

    #[test]
    fn env_overrides_configured_filter() {
        let filter = env_filter(Some("warn"), "geek_university=loud").unwrap();

        assert_eq!("warn", filter.to_string());
    }

    #[test]
    fn invalid_env_falls_back() {
        let filter = env_filter(Some("geek_university=loud"), "debug").unwrap();

        assert_eq!("debug", filter.to_string());
    }
}

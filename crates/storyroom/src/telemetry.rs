use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Console log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize console-only tracing.
///
/// `RUST_LOG` wins when set; otherwise `info,storyroom=debug`, or
/// `debug` everywhere when `verbose` is set. Logs go to stderr so stdout
/// stays clean for JSON results.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_console_telemetry(
    format: LogFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_filter = if verbose {
        "debug"
    } else {
        "info,storyroom=debug"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

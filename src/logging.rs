use tracing_subscriber::prelude::*;
use tracing_subscriber::fmt;

#[cfg(feature = "ssr")]
use crate::server::{LogFormat, ServerError};

/// Server-side subscriber. `RUST_LOG` narrows the filter, `info` otherwise.
#[cfg(feature = "ssr")]
pub fn init_logging(format: LogFormat) -> Result<(), ServerError> {
    use tracing_subscriber::EnvFilter;

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = match format {
        LogFormat::Compact => fmt::layer().compact().with_target(false).boxed(),
        LogFormat::Json => fmt::layer().json().with_current_span(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| ServerError::Logging(err.to_string()))
}

/// Routes events to the browser console. Browsers have no `std::time`, and
/// ANSI colors only render in some of them.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    let console = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_file(true)
        .with_line_number(true)
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    if tracing_subscriber::registry().with(console).try_init().is_err() {
        tracing::warn!("browser console logging already initialized");
    }
}

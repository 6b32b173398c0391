use std::io;
use std::net::SocketAddr;

use axum::{Router, routing::get};
use clap::{Parser, ValueEnum};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::{App, shell};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "insta-dl", version, about = "Serve the Instagram post downloader front-end")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to; overrides the Leptos site address
    #[arg(long, env = "BIND_ADDRESS")]
    pub bind: Option<SocketAddr>,
    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid leptos configuration: {0}")]
    Configuration(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub fn router(options: LeptosOptions) -> Router {
    let shell_options = options.clone();
    let routes = generate_route_list(App);

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, move || {
            let val = shell_options.clone();
            move || shell(val.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(options)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|err| ServerError::Configuration(err.to_string()))?;
    let mut options = conf.leptos_options;
    if let Some(bind) = config.bind {
        options.site_addr = bind;
    }
    let addr = options.site_addr;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, env = ?options.env, "listening on http://{addr}");

    axum::serve(listener, router(options).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(?err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => tracing::warn!(?err, "failed to listen for TERM signal"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_site_addr_alone() {
        let config = ServerConfig::try_parse_from(["insta-dl"]).unwrap();
        assert_eq!(config.log_format, LogFormat::Compact);
        if std::env::var_os("BIND_ADDRESS").is_none() {
            assert_eq!(config.bind, None);
        }
    }

    #[test]
    fn parses_bind_and_json_logging() {
        let config = ServerConfig::try_parse_from([
            "insta-dl",
            "--bind",
            "127.0.0.1:8080",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.bind, Some("127.0.0.1:8080".parse().unwrap()));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_malformed_bind_address() {
        assert!(ServerConfig::try_parse_from(["insta-dl", "--bind", "localhost"]).is_err());
        assert!(ServerConfig::try_parse_from(["insta-dl", "--log-format", "yaml"]).is_err());
    }

    #[test]
    fn bind_error_names_the_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:3000".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:3000: in use");
    }
}

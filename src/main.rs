#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use insta_dl::logging::init_logging;
    use insta_dl::server::{ServerConfig, serve};

    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();
    init_logging(config.log_format)?;
    tracing::info!(
        stage = "startup",
        log_format = ?config.log_format,
        bind_override = ?config.bind,
        "insta-dl starting"
    );

    serve(config).await.context("insta-dl server failed")?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

//! Vitreo Hub - vitreoretinal surgery innovation reference
//!
//! Serves the catalog of innovations, surgical techniques and historical
//! milestones as HTML pages and as a JSON API.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitreo_hub::{HubConfig, HubError, HubResult, Server};

/// Vitreo Hub CLI
#[derive(Parser)]
#[command(name = "vitreo-hub")]
#[command(about = "Vitreo Hub - vitreoretinal surgery innovation reference", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VITREO_CONFIG")]
    config: Option<String>,

    /// Listen address, overrides the configuration file
    #[arg(short, long, env = "VITREO_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level, overrides the configuration file
    #[arg(long, env = "VITREO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "VITREO_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> HubResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = HubConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| HubError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    println!(
        r#"
  __   ___ _
  \ \ / (_) |_ _ _ ___ ___
   \ V /| |  _| '_/ -_) _ \
    \_/ |_|\__|_| \___\___/

  {}
  Version: {}
  Listening: {}
"#,
        config.site.title,
        env!("CARGO_PKG_VERSION"),
        config.server.listen_addr
    );

    let server = Server::new(config)?;
    server.run().await
}

//! locale-edge
//!
//! Serves the static export of the multilingual shop site behind a locale
//! routing layer, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────────────┐
//!                 │                      LOCALE EDGE                          │
//!                 │                                                           │
//!  Client Request │  ┌──────────┐   ┌──────────────┐   ┌──────────────────┐  │
//!  ───────────────┼─▶│  tower   │──▶│    locale    │──▶│  LocaleRouter    │  │
//!                 │  │  layers  │   │  middleware  │   │  decide(path)    │  │
//!                 │  └──────────┘   └──────┬───────┘   └──────────────────┘  │
//!                 │                        │                                  │
//!                 │        ┌───────────────┼──────────────────┐               │
//!                 │        ▼               ▼                  ▼               │
//!                 │   ┌─────────┐   ┌─────────────┐   ┌────────────────┐      │
//!                 │   │ Bypass  │   │ 308 to      │   │ i18n dispatch  │      │
//!                 │   │ api/    │   │ /<default>  │   │ negotiate "/"  │      │
//!                 │   │ assets  │   │ + path      │   │ tag /<locale>  │      │
//!                 │   └────┬────┘   └─────────────┘   └───────┬────────┘      │
//!                 │        └──────────────┬───────────────────┘               │
//!                 │                       ▼                                   │
//!  Client Response│        sitemap.xml · robots.txt · api · static export     │
//!  ◀──────────────┼───────────────────────────────────────────────────────    │
//!                 └──────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use locale_edge::config::{load_config, SiteEdgeConfig};
use locale_edge::lifecycle::{signals, Shutdown};
use locale_edge::observability::{logging, metrics};
use locale_edge::HttpServer;

#[derive(Parser)]
#[command(name = "locale-edge")]
#[command(about = "Locale-aware server for the shop's static site", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteEdgeConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("locale-edge v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_url = %config.site.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(config)?;

    // Bind last: traffic only once everything above succeeded.
    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

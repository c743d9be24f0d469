//! tree-urls server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use treeurls_core::config::AppConfig;
use treeurls_server::{AppState, create_router};

/// tree-urls - stores visualization tree links keyed by SHA1
#[derive(Parser, Debug)]
#[command(name = "tree-urls")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "TREE_URLS_CONFIG",
        default_value = "config/tree-urls.toml"
    )]
    config: String,

    /// Listen address: a port ("8080"), ":port", or "host:port"
    #[arg(short, long, env = "TREE_URLS_LISTEN")]
    listen: Option<String>,
}

/// Build the configuration from the optional file, TREE_URLS_* env vars, and
/// the command line, in increasing order of precedence.
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut figment = Figment::new();

    if Path::new(&args.config).exists() {
        tracing::info!(config_path = %args.config, "Loading configuration from file");
        figment = figment.merge(Toml::file(&args.config));
    } else {
        tracing::debug!("No config file found at {}", args.config);
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed("TREE_URLS_").split("__"))
        .extract()
        .context("failed to load configuration")?;

    if let Some(listen) = &args.listen {
        config.server.listen = listen.clone();
    }

    Ok(config)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("tree-urls v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args)?;

    let store = treeurls_store::from_config(&config.database)
        .await
        .context("failed to initialize store")?;

    // Refuse to start if the database is unreachable.
    store
        .health_check()
        .await
        .context("store health check failed")?;
    tracing::info!("Store initialized");

    let addr = config
        .server
        .bind_addr()
        .context("invalid listen address")?;

    let state = AppState::new(store.clone());
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Store closed");

    Ok(())
}

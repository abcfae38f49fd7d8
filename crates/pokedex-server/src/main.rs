// pokedex: backend server for the Pokemon Explorer demo.
//
// Proxies and reshapes PokeAPI responses for the frontend. Configuration
// comes from defaults, an optional TOML file, POKEDEX_* environment
// variables, and finally CLI flags, in that order.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pokedex_api::PokeClient;
use pokedex_config::Settings;
use pokedex_core::Explorer;
use pokedex_server::{AppState, ServerError, app};

#[derive(Debug, Parser)]
#[command(name = "pokedex", about = "Pokemon Explorer backend server", version)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bind address (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides config).
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Upstream base URL (overrides config).
    #[arg(long)]
    upstream_url: Option<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        settings.host = host;
    }
    if let Some(port) = cli.port {
        settings.port = port;
    }
    if let Some(upstream_url) = cli.upstream_url {
        settings.upstream_url = upstream_url;
    }
    settings.validate()?;

    let client = PokeClient::new(settings.upstream_url()?, settings.timeout())?;
    let state = Arc::new(AppState {
        explorer: Explorer::new(client),
        default_limit: settings.default_limit,
    });

    let listener = tokio::net::TcpListener::bind(settings.listen_addr()).await?;
    info!(
        "listening on http://{} (upstream: {})",
        listener.local_addr()?,
        settings.upstream_url
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when Ctrl-C (or SIGTERM on Unix) arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

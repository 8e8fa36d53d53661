mod app;
mod config;
mod context;
mod handlers;
mod logging;
mod random;
mod state;
mod storage;
mod workflows;

use anyhow::Result;
use clap::{Parser, Subcommand};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};

use crate::{app::create_app, config::Config, state::AppState};

/// usersvc - Create and fetch user records
#[derive(Parser, Debug)]
#[command(name = "usersvc")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve both handlers over HTTP
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,

        /// Use in-memory stores instead of DynamoDB and S3
        #[arg(long)]
        in_memory: bool,
    },

    /// Run one handler under the Lambda runtime
    #[cfg(feature = "aws")]
    Lambda {
        #[arg(value_enum)]
        handler: handlers::lambda::LambdaHandler,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    logging::init(config.pretty_logs);

    match cli.command {
        Command::Serve {
            host,
            port,
            in_memory,
        } => {
            let state = build_state(&config, in_memory).await?;
            serve(state, &host, port).await
        }
        #[cfg(feature = "aws")]
        Command::Lambda { handler } => {
            let sdk_config = storage::load_sdk_config(&config).await;
            handlers::lambda::run(handler, sdk_config)
                .await
                .map_err(|e| anyhow::anyhow!(e))
        }
    }
}

#[cfg(feature = "aws")]
async fn build_state(config: &Config, in_memory: bool) -> Result<AppState> {
    if in_memory {
        tracing::info!("Using in-memory stores");
        return Ok(AppState::in_memory());
    }

    tracing::info!(
        table = %config.table_name,
        bucket = %config.bucket_name,
        endpoint = config.aws_endpoint_url.as_deref().unwrap_or("default"),
        "Using DynamoDB and S3"
    );
    let sdk_config = storage::load_sdk_config(config).await;
    Ok(AppState::aws(&sdk_config, config))
}

#[cfg(not(feature = "aws"))]
async fn build_state(_config: &Config, _in_memory: bool) -> Result<AppState> {
    tracing::info!("Built without AWS support, using in-memory stores");
    Ok(AppState::in_memory())
}

async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => TcpListener::bind(format!("{host}:{port}")).await?,
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

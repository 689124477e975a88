//! Cosecha CLI - crop yield prediction server
//!
//! # Commands
//!
//! - `serve` - Load artifacts and start the prediction server
//! - `info` - Show version and endpoint info

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cosecha::{
    api::{create_router, AppState},
    artifacts::load_artifacts,
    error::{CosechaError, Result},
};

/// Cosecha - crop yield prediction server
///
/// Serves yield predictions from a trained regression model, with a
/// rule-based fallback when no model is available.
#[derive(Parser)]
#[command(name = "cosecha")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the prediction server
    ///
    /// Examples:
    ///   cosecha serve
    ///   cosecha serve --port 8000 --model-dir ./model
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Directory containing model.json, encoders.json, metrics.json
        #[arg(short, long, default_value = "model")]
        model_dir: PathBuf,
    },
    /// Show version and configuration info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            model_dir,
        } => {
            serve(&host, port, &model_dir).await?;
        }
        Commands::Info => {
            println!("cosecha {}", cosecha::VERSION);
            println!();
            println!("Crop yield prediction server:");
            println!("  - Regression model inference with categorical encoding");
            println!("  - Rule-based fallback when no model is loaded");
            println!("  - REST API: /predict, /health, /model-info");
        }
    }

    Ok(())
}

async fn serve(host: &str, port: u16, model_dir: &std::path::Path) -> Result<()> {
    println!("Starting cosecha prediction server...");
    println!("Loading artifacts from: {}", model_dir.display());

    let ctx = load_artifacts(model_dir);
    println!("  model loaded:    {}", ctx.model_loaded());
    println!("  encoders loaded: {}", ctx.encoders_loaded());

    let state = AppState::new(ctx);
    let app = create_router(state);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| CosechaError::Server {
            reason: format!("Invalid address: {e}"),
        })?;

    println!("Server listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /health     - Health check");
    println!("  GET  /model-info - Model information");
    println!("  POST /predict    - Predict crop yield");
    println!();
    println!("Example:");
    println!("  curl http://{addr}/health");
    println!();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| CosechaError::Server {
            reason: format!("Failed to bind: {e}"),
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| CosechaError::Server {
            reason: format!("Server error: {e}"),
        })?;

    Ok(())
}

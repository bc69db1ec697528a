//! voxbridge - Vapi text-to-speech proxy server.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use voxbridge_handler::{AppState, Config, redact, router};

/// voxbridge - Vapi text-to-speech proxy server.
///
/// Serves two endpoints:
///   - POST /api/cedar-tts  OpenAI TTS (voice "cedar")
///   - POST /api/azure-tts  Azure Speech (French neural voices)
///
/// Provider credentials are read from the environment:
/// OPENAI_API_KEY, AZURE_SPEECH_KEY, AZURE_SPEECH_REGION.
#[derive(Parser)]
#[command(name = "voxbridge")]
#[command(about = "Vapi text-to-speech proxy server")]
#[command(version)]
struct Cli {
    /// Listen address (":3000" listens on all interfaces)
    #[arg(long, default_value = ":3000")]
    addr: String,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "configuration loaded");
    if let Some(key) = &config.openai_api_key {
        tracing::info!(key = %redact(key), "openai credentials present");
    }
    if let Some(key) = &config.azure_speech_key {
        tracing::info!(
            key = %redact(key),
            region = config.azure_speech_region.as_deref().unwrap_or("<unset>"),
            "azure credentials present"
        );
    }

    let state = AppState::new(&config);
    tracing::info!(
        openai = state.is_openai_configured(),
        azure = state.is_azure_configured(),
        "providers ready"
    );
    let app = router(state);

    let addr = parse_addr(&cli.addr)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server started");
    tracing::info!("  - POST /api/cedar-tts  OpenAI TTS");
    tracing::info!("  - POST /api/azure-tts  Azure Speech");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Parse address string to SocketAddr.
fn parse_addr(addr: &str) -> Result<SocketAddr> {
    let addr = if addr.starts_with(':') {
        format!("0.0.0.0{}", addr)
    } else {
        addr.to_string()
    };
    Ok(addr.parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

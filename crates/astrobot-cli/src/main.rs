use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use astrobot_core::providers::{GroqProvider, OllamaProvider, Provider, ProviderRouter};
use astrobot_gateway::RelayServer;
use config::RelayConfig;

#[derive(Parser)]
#[command(name = "astrobot")]
#[command(version)]
#[command(about = "AstroBot — a space-chat relay with ordered provider fallback")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the relay server
    Start,

    /// Initialize config directory and default config
    Init,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Init => cmd_init().await,
        Commands::Config => cmd_config(&cli.config),
        Commands::Start => cmd_start(&cli.config).await,
    }
}

async fn cmd_init() -> Result<()> {
    let config_dir = config::config_dir();
    tokio::fs::create_dir_all(&config_dir)
        .await
        .with_context(|| format!("Failed to create config dir: {}", config_dir.display()))?;

    let config_path = config_dir.join("config.toml");
    if config_path.exists() {
        warn!("Config already exists at {}", config_path.display());
    } else {
        let default_config = include_str!("../../../config/default.toml");
        tokio::fs::write(&config_path, default_config).await?;
        info!("Created default config at {}", config_path.display());
    }

    println!("AstroBot initialized at {}", config_dir.display());
    println!(
        "Edit {} to point the relay at your providers.",
        config_path.display()
    );
    Ok(())
}

fn cmd_config(custom_path: &Option<PathBuf>) -> Result<()> {
    let config = RelayConfig::load(custom_path)?;
    println!("{:#?}", config);
    Ok(())
}

async fn cmd_start(custom_path: &Option<PathBuf>) -> Result<()> {
    let config = RelayConfig::load(custom_path)?;

    let ollama = &config.providers.ollama;
    let groq = &config.providers.groq;

    info!("Provider chain:");
    info!("  1. local  — Ollama {} at {}", ollama.model, ollama.base_url);
    info!("  2. hosted — Groq {} (key from ${})", groq.model, groq.api_key_env);
    info!("  3. offline fallback — always available");

    let providers: Vec<Box<dyn Provider>> = vec![
        Box::new(OllamaProvider::new(
            ollama.base_url.clone(),
            ollama.model.clone(),
        )),
        Box::new(GroqProvider::new(
            groq.base_url.clone(),
            groq.model.clone(),
            groq.api_key_env.clone(),
        )),
    ];
    let router = Arc::new(ProviderRouter::new(providers)?);

    let bind: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let server = RelayServer::new(bind, router);

    tokio::select! {
        result = server.run() => result,
        _ = signal::ctrl_c() => {
            info!("Shutting down");
            Ok(())
        }
    }
}

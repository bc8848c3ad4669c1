//! # Demerit
//!
//! School disciplinary-management backend: handbook passage search and
//! the student FAQ chatbot, served over HTTP.
//!
//! Usage:
//!   demerit                                # Start with ~/.demerit/config.toml
//!   demerit --port 9090                    # Override the listen port
//!   demerit --handbook ./handbook.txt      # Override the handbook file

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use demerit_core::DemeritConfig;

#[derive(Parser)]
#[command(
    name = "demerit",
    version,
    about = "🏫 Demerit: handbook search and FAQ chatbot for school discipline"
)]
struct Cli {
    /// Path to an alternate config file
    #[arg(short, long)]
    config: Option<String>,

    /// Listen host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Handbook text file (overrides config)
    #[arg(long)]
    handbook: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "demerit=debug,demerit_gateway=debug,demerit_engine=debug,tower_http=debug"
    } else {
        "demerit=info,demerit_gateway=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Load config, then apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => {
            let expanded = shellexpand::tilde(path).into_owned();
            DemeritConfig::load_from(std::path::Path::new(&expanded))?
        }
        None => DemeritConfig::load()?,
    };
    if let Some(host) = cli.host {
        config.gateway.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }
    if let Some(handbook) = cli.handbook {
        config.handbook.path = handbook;
    }

    println!("🏫 Demerit v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "   🌐 API:      http://{}:{}",
        config.gateway.host, config.gateway.port
    );
    println!(
        "   📚 Handbook: {}",
        config.handbook.resolved_path().display()
    );
    println!();

    demerit_gateway::start(config).await
}

use ai_dashboard::metrics::{generate_metrics, ThreadRandom};
use ai_dashboard::{transport, Config};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ai-dashboard")]
#[command(author, version, about = "Demo AI analytics dashboard with mock metrics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Print one generated metrics snapshot
    Snapshot {
        /// Output format (table, json)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Print the effective configuration
    Config,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "ai_dashboard=debug,tower_http=debug"
    } else {
        "ai_dashboard=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            tracing::info!(
                "Starting HTTP server on {}:{}",
                config.server.host,
                config.server.port
            );
            transport::run_http_server(config).await?;
        }
        Commands::Snapshot { format } => {
            let snapshot = generate_metrics(&mut ThreadRandom::new());
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                "table" => {
                    println!("{:<16} {:.1}", "model_accuracy", snapshot.model_accuracy);
                    println!("{:<16} {}", "response_time", snapshot.response_time);
                    println!("{:<16} {}", "active_users", snapshot.active_users);
                    println!("{:<16} {}", "data_processed", snapshot.data_processed);
                    println!("{:<16} {}", "system_status", snapshot.system_status);
                    println!("{:<16} {}", "uptime", snapshot.uptime);
                }
                other => bail!("Unknown format: {} (expected json or table)", other),
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

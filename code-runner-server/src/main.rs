use clap::Parser;
use code_runner::Config;
use code_runner_server::{create_app, run_server};
use std::{net::SocketAddr, path::PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to listen on
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// TOML file with engine settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of concurrent executions, overrides the config file
    #[arg(short, long)]
    max_concurrent: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    if let Some(max_concurrent) = args.max_concurrent {
        anyhow::ensure!(max_concurrent > 0, "--max-concurrent must be at least 1");
        config.max_concurrent_executions = max_concurrent;
    }

    let app = create_app(&config);
    run_server(app, args.addr).await?;

    Ok(())
}

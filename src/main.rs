use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use synapse_growth::{picker, Catalog, Config, StateStore, StaticServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "synapse-growth", about = "Local-first analytics learning app")]
struct Args {
    /// Config file path; defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Port for the static server.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Directory holding the app shell and assets.
    #[arg(long, env = "PUBLIC_DIR")]
    public_dir: Option<PathBuf>,

    /// Directory holding the state database.
    #[arg(long, env = "STATE_DIR")]
    state_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("synapse_growth=info")),
        )
        .init();

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(synapse_growth::config::config_path);

    let mut config = Config::load(&config_path)?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(public_dir) = args.public_dir {
        config.public_dir = public_dir;
    }
    if let Some(state_dir) = args.state_dir {
        config.state_dir = state_dir;
    }
    if !config_path.exists() {
        config.save(&config_path)?;
        info!(path = %config_path.display(), "Wrote default configuration");
    }

    std::fs::create_dir_all(&config.state_dir)?;
    let store = StateStore::open(config.state_db_path())?;

    let catalog = Arc::new(Catalog::builtin()?);
    info!(
        paths = catalog.paths.len(),
        challenges = catalog.sql.len(),
        cases = catalog.cases.len(),
        quiz = catalog.quiz.len(),
        "Catalogs loaded"
    );
    if let Some(message) = picker::pick_random(&catalog.spark_messages) {
        info!("{message}");
    }

    let bind_addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let server = Arc::new(
        StaticServer::new(config.public_dir.clone(), bind_addr).with_store(store),
    );

    info!("Synapse Growth running at http://localhost:{}", config.port);
    server.run().await?;
    Ok(())
}

use std::{env, fs, sync::Arc, thread};

use anyhow::Context;
use liblife::LifeConfig;
use state::State;
use tracing_subscriber::EnvFilter;

mod cli;
mod intent;
mod renderer;
mod state;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(config_path) => {
            let config_serialized = fs::read(&config_path)
                .with_context(|| format!("Reading config {config_path}"))?;
            serde_json::from_slice(&config_serialized).context("Deserializing config")?
        }
        None => LifeConfig::default(),
    };

    tracing::info!(?config, "starting");

    let state_arc = Arc::new(State::new(config).context("Creating grid")?);

    let cli_state_arc = state_arc.clone();
    thread::spawn(move || cli::run_cli(cli_state_arc));

    renderer::run(state_arc)
}

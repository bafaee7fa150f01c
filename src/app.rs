//! Program to ping a backend health endpoint once.
//!
//! Run without arguments to ping the compiled-in endpoint:
//!
//! ```text
//! cargo run
//! ```
//!
//! Run providing a config file path:
//!
//! ```text
//! cargo run -- --config-path "./ping_config.json"
//! PINGER_CONFIG_PATH="./ping_config.json" cargo run
//! ```
//!
//! Run providing the configuration:
//!
//! ```text
//! PINGER_CONFIG=$(cat "./ping_config.json") cargo run
//! ```
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use crate::config::{parse_from_json, Configuration};
use crate::console::Console;
use crate::ping::PingOutcome;
use crate::service::Service;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to an optional JSON configuration file.
    #[clap(short, long, env = "PINGER_CONFIG_PATH")]
    config_path: Option<PathBuf>,

    /// Direct configuration content in JSON.
    #[clap(env = "PINGER_CONFIG", hide_env_values = true)]
    config_content: Option<String>,
}

/// # Errors
///
/// Will return an error if a supplied configuration cannot be read or parsed.
/// A failing ping is not an error; its outcome is reported on the console.
pub async fn run() -> Result<PingOutcome> {
    let () = tracing_subscriber::fmt().compact().with_max_level(Level::INFO).init();

    let args = Args::parse();

    let config = setup_config(args)?;

    let service = Service {
        config: Arc::new(config),
        console: Console::new(),
    };

    Ok(service.run_ping().await)
}

fn setup_config(args: Args) -> Result<Configuration> {
    // If a config is directly supplied, we use it.
    if let Some(config) = args.config_content {
        parse_from_json(&config).context("invalid config format")
    }
    // or we load it from a file...
    else if let Some(path) = args.config_path {
        let file_content = std::fs::read_to_string(path.clone()).with_context(|| format!("can't read config file {path:?}"))?;
        parse_from_json(&file_content).context("invalid config format")
    }
    // without any config the compiled-in endpoint is pinged.
    else {
        Ok(Configuration::default())
    }
}

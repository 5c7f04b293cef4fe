use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use songs_dashboard::config::{AppConfig, CliConfig, FileConfig};
use songs_dashboard::dashboard::{Dashboard, DEFAULT_YEAR};
use songs_dashboard::dataset::load_dataset;
use songs_dashboard::server::{run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the songs CSV file.
    #[clap(value_parser = parse_path, default_value = "Popular_Spotify_Songs.csv")]
    pub dataset: PathBuf,

    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The address to listen on.
    #[clap(long, default_value = "0.0.0.0")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, env = "PORT", default_value_t = 10000)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Year initially selected in every year control.
    #[clap(long, default_value_t = DEFAULT_YEAR)]
    pub default_year: i32,

    /// The maximum age of the dashboard page in the browser cache, in seconds.
    #[clap(long, default_value_t = 0)]
    pub page_cache_age_sec: usize,

    /// Path to a frontend directory to be statically served instead of the embedded page.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            dataset_path: self.dataset.clone(),
            host: self.host.clone(),
            port: self.port,
            logging_level: self.logging_level.clone(),
            default_year: self.default_year,
            page_cache_age_sec: self.page_cache_age_sec,
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let dataset = match load_dataset(&config.dataset_path) {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("Could not load dataset: {}", err);
            return Err(err)
                .with_context(|| format!("Failed to load dataset {:?}", config.dataset_path));
        }
    };
    info!(
        "Dataset has {} songs released across {} years",
        dataset.len(),
        dataset.years().len()
    );

    let dashboard = Arc::new(Dashboard::new(Arc::new(dataset), config.default_year));

    run_server(config.server_config(), dashboard).await
}

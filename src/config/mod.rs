mod file_config;

pub use file_config::FileConfig;

use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub dataset_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub default_year: i32,
    pub page_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub default_year: i32,
    pub page_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let dataset_path = file
            .dataset_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.dataset_path.clone());

        if !dataset_path.exists() {
            bail!("Dataset file does not exist: {:?}", dataset_path);
        }
        if !dataset_path.is_file() {
            bail!("Dataset path is not a file: {:?}", dataset_path);
        }

        let host = file.host.unwrap_or_else(|| cli.host.clone());
        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let default_year = file.default_year.unwrap_or(cli.default_year);
        let page_cache_age_sec = file.page_cache_age_sec.unwrap_or(cli.page_cache_age_sec);

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());
        if let Some(dir) = &frontend_dir_path {
            if !PathBuf::from(dir).is_dir() {
                bail!("Frontend directory does not exist: {:?}", dir);
            }
        }

        Ok(Self {
            dataset_path,
            host,
            port,
            logging_level,
            default_year,
            page_cache_age_sec,
            frontend_dir_path,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            host: self.host.clone(),
            port: self.port,
            page_cache_age_sec: self.page_cache_age_sec,
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

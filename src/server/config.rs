use super::RequestsLoggingLevel;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub host: String,
    pub port: u16,
    /// max-age of the dashboard page, chart data is never cached.
    pub page_cache_age_sec: usize,
    /// When set, this directory is served instead of the embedded page.
    pub frontend_dir_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            host: "0.0.0.0".to_owned(),
            port: 10000,
            page_cache_age_sec: 0,
            frontend_dir_path: None,
        }
    }
}

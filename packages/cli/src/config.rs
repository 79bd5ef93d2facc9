use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

pub const STORE_PATH_VAR: &str = "RPS_STORE_PATH";
pub const LOG_LEVEL_VAR: &str = "RPS_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` keeps games in memory for the lifetime of the process.
    pub store_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(STORE_PATH_VAR).ok(),
            std::env::var(LOG_LEVEL_VAR).ok(),
        )
    }

    fn from_vars(store_path: Option<String>, log_level: Option<String>) -> Self {
        let store_path = store_path
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let log_level = log_level
            .and_then(|level| Level::from_str(level.trim()).ok())
            .unwrap_or(Level::WARN);

        Config {
            store_path,
            log_level,
        }
    }
}

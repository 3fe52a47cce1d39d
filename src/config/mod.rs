use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod manager;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub daemon: DaemonConfig,
    pub files: FileConfig,
    pub restart: RestartConfig,
}

/// Which executable to supervise and how to recognize its workers.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DaemonConfig {
    /// Path to the daemon executable
    pub command: String,
    /// Arguments passed to the daemon on launch
    #[serde(default)]
    pub args: Vec<String>,
    /// Regex matched against process command lines to find auxiliary
    /// worker processes not tracked by the PID file
    pub worker_pattern: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct FileConfig {
    pub pid_file: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RestartConfig {
    /// Fixed pause between stop and start, in seconds
    pub grace_period_secs: u64,
    /// Poll until the old PID is gone before starting again
    pub wait_for_exit: bool,
    /// Upper bound on the poll; the old PID is force-killed after this
    pub wait_timeout_secs: u64,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Config {
    pub fn load_or_create() -> Result<Self> {
        ConfigManager::load_or_create()
    }

    pub fn validate(&self) -> Result<()> {
        if self.daemon.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "daemon command must not be empty".to_string(),
            ));
        }
        if self.files.pid_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "PID file path must not be empty".to_string(),
            ));
        }
        if let Err(e) = regex::Regex::new(&self.daemon.worker_pattern) {
            return Err(ConfigError::Validation(format!(
                "invalid worker pattern '{}': {}",
                self.daemon.worker_pattern, e
            )));
        }
        Ok(())
    }
}

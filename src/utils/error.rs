//! Error types for vigil operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VigilError>;

#[derive(Error, Debug)]
pub enum VigilError {
    #[error("launch failed: {0}")]
    Launch(String),

    #[error("daemon is already running (PID {pid})")]
    AlreadyRunning { pid: u32 },

    #[error("signal delivery failed: {0}")]
    Signal(String),

    #[error("PID file error: {0}")]
    PidFile(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VigilError {
    pub fn launch_error<S: Into<String>>(msg: S) -> Self {
        VigilError::Launch(msg.into())
    }

    pub fn already_running(pid: u32) -> Self {
        VigilError::AlreadyRunning { pid }
    }

    pub fn signal_error<S: Into<String>>(msg: S) -> Self {
        VigilError::Signal(msg.into())
    }

    pub fn pid_file_error<S: Into<String>>(msg: S) -> Self {
        VigilError::PidFile(msg.into())
    }

    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        VigilError::Config(msg.into())
    }
}

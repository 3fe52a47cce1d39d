//! The managed daemon: its descriptor, its observable state, and the PID
//! file that records the running instance.

pub mod pid_file;

pub use pid_file::PidFile;

use crate::config::Config;
use crate::utils::{Result, VigilError};
use regex::Regex;
use std::path::PathBuf;

/// Everything vigil needs to know about the daemon it supervises.
///
/// Built once from the config at invocation time and never mutated.
#[derive(Debug, Clone)]
pub struct DaemonDescriptor {
    /// Path to the daemon executable
    pub command: String,
    /// Arguments passed on launch
    pub args: Vec<String>,
    /// Matches command lines of auxiliary worker processes the daemon
    /// spawns but the PID file does not track
    pub worker_pattern: Regex,
    /// Where the running instance's PID is recorded
    pub pid_file: PathBuf,
}

impl DaemonDescriptor {
    pub fn from_config(config: &Config) -> Result<Self> {
        let worker_pattern = Regex::new(&config.daemon.worker_pattern).map_err(|e| {
            VigilError::config_error(format!(
                "invalid worker pattern '{}': {}",
                config.daemon.worker_pattern, e
            ))
        })?;

        Ok(Self {
            command: config.daemon.command.clone(),
            args: config.daemon.args.clone(),
            worker_pattern,
            pid_file: PathBuf::from(&config.files.pid_file),
        })
    }
}

/// Observable daemon state, derived from the PID file and the process table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaemonState {
    /// No PID file, or the recorded process is gone
    Stopped,
    /// The PID file references a live process
    Running(u32),
    /// A PID file exists but its contents are not a verifiable PID
    Unknown,
}

impl std::fmt::Display for DaemonState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DaemonState::Stopped => write!(f, "stopped"),
            DaemonState::Running(pid) => write!(f, "running (PID {})", pid),
            DaemonState::Unknown => write!(f, "unknown"),
        }
    }
}

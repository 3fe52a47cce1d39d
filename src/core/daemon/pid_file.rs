//! Explicit handle for the PID file, the one piece of state that outlives
//! an invocation.

use crate::utils::Result;
use std::path::{Path, PathBuf};

/// Handle to the file recording the running daemon instance's PID.
///
/// Absence and staleness are tolerated: a missing or unparseable file
/// reads as `None`. There is no locking; concurrent invocations are
/// undefined behavior.
#[derive(Debug, Clone)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the recorded PID. `None` if the file is missing or does not
    /// contain a parseable integer.
    pub fn read(&self) -> Option<u32> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        contents.trim().parse().ok()
    }

    /// Record a PID, creating parent directories as needed.
    pub fn write(&self, pid: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, pid.to_string())?;
        Ok(())
    }

    /// Remove the file. Removing an absent file is not an error.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

//! Restart command implementation

use crate::config::Config;
use crate::core::supervisor::Supervisor;
use crate::utils::Result;

pub fn execute(config: Config) -> Result<()> {
    let supervisor = Supervisor::from_config(&config)?;

    println!("▶ restarting {}...", supervisor.descriptor().command);
    let pid = supervisor.restart()?;
    println!("✅ daemon restarted (PID {})", pid);

    Ok(())
}

//! Start command implementation

use crate::config::Config;
use crate::core::supervisor::Supervisor;
use crate::utils::Result;

pub fn execute(config: Config) -> Result<()> {
    let supervisor = Supervisor::from_config(&config)?;

    println!("▶ starting {}...", supervisor.descriptor().command);
    let pid = supervisor.start()?;
    println!(
        "✅ daemon started (PID {}, recorded in {})",
        pid,
        supervisor.pid_file().path().display()
    );

    Ok(())
}

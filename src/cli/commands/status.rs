//! Status command implementation

use crate::config::Config;
use crate::core::daemon::DaemonState;
use crate::core::supervisor::Supervisor;
use crate::utils::Result;

pub fn execute(config: Config) -> Result<()> {
    let supervisor = Supervisor::from_config(&config)?;
    let pid_file = supervisor.pid_file();

    match supervisor.state() {
        DaemonState::Running(pid) => {
            println!("daemon is running (PID {})", pid);
            println!("PID file: {}", pid_file.path().display());
        }
        DaemonState::Stopped => println!("daemon is not running"),
        DaemonState::Unknown => {
            println!(
                "⚠️  PID file {} exists but does not contain a valid PID",
                pid_file.path().display()
            );
        }
    }

    Ok(())
}

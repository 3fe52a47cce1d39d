//! Stop command implementation
//!
//! Best-effort teardown: stopping an already-stopped daemon succeeds.

use crate::config::Config;
use crate::core::supervisor::Supervisor;
use crate::utils::Result;

pub fn execute(config: Config) -> Result<()> {
    let supervisor = Supervisor::from_config(&config)?;
    let outcome = supervisor.stop();

    match (outcome.signalled, outcome.stale_pid) {
        (Some(pid), _) => println!("✅ daemon interrupted (PID {})", pid),
        (None, Some(pid)) => {
            println!("cleaned up stale PID file (process {} was not running)", pid)
        }
        (None, None) => println!("daemon is not running"),
    }

    if outcome.workers_killed > 0 {
        println!("✅ killed {} worker process(es)", outcome.workers_killed);
    }

    Ok(())
}

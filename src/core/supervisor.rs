//! The lifecycle controller: start, stop and restart one daemon, driven
//! only by explicit commands. No monitoring, no automatic restart.

use crate::config::{Config, RestartConfig};
use crate::core::daemon::{DaemonDescriptor, DaemonState, PidFile};
use crate::core::process::{self, Signal};
use crate::utils::{Result, VigilError};
use std::time::{Duration, Instant};

/// What a `stop` actually did. `stop` itself never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct StopOutcome {
    /// PID that received the interrupt signal, if any
    pub signalled: Option<u32>,
    /// A stale PID file referenced this already-dead process
    pub stale_pid: Option<u32>,
    /// Auxiliary worker processes force-killed by pattern match
    pub workers_killed: usize,
}

pub struct Supervisor {
    descriptor: DaemonDescriptor,
    restart: RestartConfig,
}

impl Supervisor {
    pub fn new(descriptor: DaemonDescriptor, restart: RestartConfig) -> Self {
        Self {
            descriptor,
            restart,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            DaemonDescriptor::from_config(config)?,
            config.restart.clone(),
        ))
    }

    pub fn descriptor(&self) -> &DaemonDescriptor {
        &self.descriptor
    }

    pub fn pid_file(&self) -> PidFile {
        PidFile::new(self.descriptor.pid_file.clone())
    }

    /// Derive the daemon state from the PID file and the process table.
    pub fn state(&self) -> DaemonState {
        let pid_file = self.pid_file();
        if !pid_file.exists() {
            return DaemonState::Stopped;
        }
        match pid_file.read() {
            Some(pid) if process::is_alive(pid) => DaemonState::Running(pid),
            Some(_) => DaemonState::Stopped,
            None => DaemonState::Unknown,
        }
    }

    /// Launch the daemon detached and record its PID.
    ///
    /// Refuses to double-launch: if the PID file references a live process
    /// this fails with `AlreadyRunning`. A stale PID file is cleaned up
    /// and launch proceeds.
    pub fn start(&self) -> Result<u32> {
        let pid_file = self.pid_file();

        if let Some(pid) = pid_file.read() {
            if process::is_alive(pid) {
                return Err(VigilError::already_running(pid));
            }
            pid_file.remove()?;
        }

        let pid = process::launch_detached(&self.descriptor.command, &self.descriptor.args)?;
        pid_file.write(pid)?;

        Ok(pid)
    }

    /// Signal the recorded daemon to shut down and force-kill any
    /// auxiliary workers still in the process table.
    ///
    /// Best-effort by design: absent PID files, dead targets and failed
    /// signal deliveries are all tolerated. The PID file is always removed.
    pub fn stop(&self) -> StopOutcome {
        let pid_file = self.pid_file();
        let mut outcome = StopOutcome::default();

        if let Some(pid) = pid_file.read() {
            if process::is_alive(pid) {
                // Interrupt, not kill, so the daemon can shut down cleanly
                if process::send_signal(pid, Signal::Interrupt).is_ok() {
                    outcome.signalled = Some(pid);
                }
            } else {
                outcome.stale_pid = Some(pid);
            }
        }

        outcome.workers_killed = self.kill_workers();

        let _ = pid_file.remove();
        outcome
    }

    /// Stop, wait out the grace period, then start again.
    ///
    /// Always sleeps the fixed grace period between the two. When
    /// `wait_for_exit` is enabled the old PID is additionally polled
    /// until it is gone (bounded by `wait_timeout_secs`, force-killed on
    /// timeout); otherwise the stop is fire-and-forget and start may race
    /// a daemon that is still tearing down.
    pub fn restart(&self) -> Result<u32> {
        let old_pid = self.pid_file().read();
        self.stop();

        std::thread::sleep(Duration::from_secs(self.restart.grace_period_secs));

        if self.restart.wait_for_exit {
            if let Some(pid) = old_pid {
                if !self.wait_until_gone(pid, Duration::from_secs(self.restart.wait_timeout_secs)) {
                    // Grace exhausted, stop being polite
                    let _ = process::send_signal(pid, Signal::Kill);
                }
            }
        }

        self.start()
    }

    /// SIGKILL every process whose command line matches the worker
    /// pattern. Returns how many were signalled; scan failures count as
    /// zero matches.
    fn kill_workers(&self) -> usize {
        let pids = process::find_processes(&self.descriptor.worker_pattern).unwrap_or_default();

        let mut killed = 0;
        for pid in pids {
            if process::send_signal(pid, Signal::Kill).is_ok() {
                killed += 1;
            }
        }
        killed
    }

    fn wait_until_gone(&self, pid: u32, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if !process::is_alive(pid) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        !process::is_alive(pid)
    }
}

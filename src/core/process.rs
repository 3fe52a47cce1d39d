//! Thin interfaces to the OS process facilities: liveness probes, signal
//! delivery, process-table scans and detached launches.

use crate::utils::{Result, VigilError};
use regex::Regex;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

/// Signals vigil delivers to managed processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Polite shutdown request, gives the daemon a chance to clean up
    Interrupt,
    /// Immediate, non-catchable termination
    Kill,
}

impl Signal {
    fn as_raw(self) -> libc::c_int {
        match self {
            Signal::Interrupt => libc::SIGINT,
            Signal::Kill => libc::SIGKILL,
        }
    }
}

/// Check if a process with the given PID is alive.
///
/// Signal 0 delivers nothing but performs the existence check.
pub fn is_alive(pid: u32) -> bool {
    unsafe { libc::kill(pid as i32, 0) == 0 }
}

/// Deliver a signal to a single process.
pub fn send_signal(pid: u32, signal: Signal) -> Result<()> {
    let rc = unsafe { libc::kill(pid as i32, signal.as_raw()) };
    if rc == 0 {
        Ok(())
    } else {
        Err(VigilError::signal_error(format!(
            "could not signal PID {}: {}",
            pid,
            std::io::Error::last_os_error()
        )))
    }
}

/// Scan the process table for command lines matching `pattern`.
///
/// Equivalent of the classic `ps | grep | awk` pipeline. The calling
/// process is excluded so a broad pattern cannot make vigil kill itself.
pub fn find_processes(pattern: &Regex) -> Result<Vec<u32>> {
    let output = Command::new("ps")
        .args(["-eo", "pid=,args="])
        .output()
        .map_err(|e| VigilError::signal_error(format!("failed to run ps: {}", e)))?;

    let own_pid = std::process::id();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let mut matches = Vec::new();
    for line in stdout.lines() {
        let line = line.trim_start();
        let Some((pid_str, args)) = line.split_once(char::is_whitespace) else {
            continue;
        };
        let Ok(pid) = pid_str.parse::<u32>() else {
            continue;
        };
        if pid == own_pid {
            continue;
        }
        if pattern.is_match(args.trim_start()) {
            matches.push(pid);
        }
    }

    Ok(matches)
}

/// Launch an executable as a detached background process and return its PID.
///
/// The child gets its own session (so it survives this process exiting and
/// never holds the controlling terminal) and null stdio.
pub fn launch_detached(command: &str, args: &[String]) -> Result<u32> {
    validate_executable(command)?;

    let mut cmd = Command::new(command);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    unsafe {
        cmd.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(())
        });
    }

    let mut child = cmd
        .spawn()
        .map_err(|e| VigilError::launch_error(format!("failed to launch '{}': {}", command, e)))?;
    let pid = child.id();

    // Reap the child whenever it exits so it cannot linger as a zombie
    // while this process is still alive
    std::thread::spawn(move || {
        let _ = child.wait();
    });

    Ok(pid)
}

fn validate_executable(command: &str) -> Result<()> {
    let path = Path::new(command);
    let metadata = std::fs::metadata(path)
        .map_err(|_| VigilError::launch_error(format!("executable not found: {}", command)))?;

    if !metadata.is_file() {
        return Err(VigilError::launch_error(format!(
            "not a regular file: {}",
            command
        )));
    }
    if metadata.permissions().mode() & 0o111 == 0 {
        return Err(VigilError::launch_error(format!(
            "not executable: {}",
            command
        )));
    }

    Ok(())
}

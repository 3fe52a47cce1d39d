//! End-to-end lifecycle tests driving the supervisor against throwaway
//! `sleep` daemons.
//!
//! Each test uses a unique sleep duration so process-table scans never see
//! processes belonging to another test running in parallel.

use std::time::{Duration, Instant};
use tempfile::TempDir;
use vigil::config::{Config, DaemonConfig, FileConfig, RestartConfig};
use vigil::core::process;
use vigil::{DaemonState, Supervisor, VigilError};

fn sleep_config(temp_dir: &TempDir, sleep_arg: &str, worker_pattern: &str) -> Config {
    Config {
        daemon: DaemonConfig {
            command: "/bin/sleep".to_string(),
            args: vec![sleep_arg.to_string()],
            worker_pattern: worker_pattern.to_string(),
        },
        files: FileConfig {
            pid_file: temp_dir
                .path()
                .join("daemon.pid")
                .to_string_lossy()
                .to_string(),
        },
        restart: RestartConfig {
            grace_period_secs: 1,
            wait_for_exit: true,
            wait_timeout_secs: 5,
        },
    }
}

fn wait_until_gone(pid: u32) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if !process::is_alive(pid) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    false
}

#[test]
fn test_start_then_stop_leaves_nothing_behind() {
    let temp_dir = TempDir::new().unwrap();
    let config = sleep_config(&temp_dir, "31251", "vigil-it-no-worker-1");
    let supervisor = Supervisor::from_config(&config).unwrap();

    // PID file absent, daemon stopped
    assert_eq!(supervisor.state(), DaemonState::Stopped);

    let pid = supervisor.start().unwrap();
    assert_eq!(supervisor.pid_file().read(), Some(pid));
    assert!(process::is_alive(pid));
    assert_eq!(supervisor.state(), DaemonState::Running(pid));

    let outcome = supervisor.stop();
    assert_eq!(outcome.signalled, Some(pid));

    assert!(wait_until_gone(pid), "daemon survived stop");
    // The PID file is removed by stop
    assert!(!supervisor.pid_file().exists());
    assert_eq!(supervisor.state(), DaemonState::Stopped);
}

#[test]
fn test_stop_when_nothing_runs_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = sleep_config(&temp_dir, "31252", "vigil-it-no-worker-2");
    let supervisor = Supervisor::from_config(&config).unwrap();

    let outcome = supervisor.stop();
    assert_eq!(outcome.signalled, None);
    assert_eq!(outcome.stale_pid, None);
    assert_eq!(outcome.workers_killed, 0);
}

#[test]
fn test_stop_tolerates_dead_recorded_pid() {
    let temp_dir = TempDir::new().unwrap();
    let config = sleep_config(&temp_dir, "31253", "vigil-it-no-worker-3");
    let supervisor = Supervisor::from_config(&config).unwrap();

    // Record a PID that is guaranteed dead and reaped
    let mut child = std::process::Command::new("true").spawn().unwrap();
    child.wait().unwrap();
    supervisor.pid_file().write(child.id()).unwrap();

    let outcome = supervisor.stop();
    assert_eq!(outcome.stale_pid, Some(child.id()));
    assert!(!supervisor.pid_file().exists());
}

#[test]
fn test_double_start_is_refused() {
    let temp_dir = TempDir::new().unwrap();
    let config = sleep_config(&temp_dir, "31254", "vigil-it-no-worker-4");
    let supervisor = Supervisor::from_config(&config).unwrap();

    let pid = supervisor.start().unwrap();
    match supervisor.start() {
        Err(VigilError::AlreadyRunning { pid: p }) => assert_eq!(p, pid),
        other => panic!("expected AlreadyRunning, got {:?}", other.map(|_| ())),
    }

    // Still exactly the one instance
    assert_eq!(supervisor.state(), DaemonState::Running(pid));
    supervisor.stop();
    assert!(wait_until_gone(pid));
}

#[test]
fn test_restart_twice_ends_with_single_instance() {
    let temp_dir = TempDir::new().unwrap();
    let config = sleep_config(&temp_dir, "31255", "vigil-it-no-worker-5");
    let supervisor = Supervisor::from_config(&config).unwrap();

    let first = supervisor.start().unwrap();

    let second = supervisor.restart().unwrap();
    assert_ne!(first, second);
    assert!(wait_until_gone(first));

    let third = supervisor.restart().unwrap();
    assert!(wait_until_gone(second));
    assert_eq!(supervisor.state(), DaemonState::Running(third));

    // Exactly one matching instance in the process table
    let pattern = regex::Regex::new("sleep 31255").unwrap();
    let instances = process::find_processes(&pattern).unwrap();
    assert_eq!(instances, vec![third]);

    supervisor.stop();
    assert!(wait_until_gone(third));
}

#[test]
fn test_stop_kills_matching_worker_processes() {
    let temp_dir = TempDir::new().unwrap();
    let config = sleep_config(&temp_dir, "31256", "sleep 27183");
    let supervisor = Supervisor::from_config(&config).unwrap();

    // A worker the PID file knows nothing about
    let mut worker = std::process::Command::new("/bin/sleep")
        .arg("27183")
        .spawn()
        .unwrap();

    // Give the worker a moment to exec so the process table shows its
    // real command line
    std::thread::sleep(Duration::from_millis(200));

    let outcome = supervisor.stop();
    assert_eq!(outcome.signalled, None);
    assert_eq!(outcome.workers_killed, 1);

    let status = worker.wait().unwrap();
    assert!(!status.success());
}

#[test]
fn test_restart_from_stopped_state() {
    let temp_dir = TempDir::new().unwrap();
    let config = sleep_config(&temp_dir, "31257", "vigil-it-no-worker-6");
    let supervisor = Supervisor::from_config(&config).unwrap();

    // restart with nothing running degrades to a plain start
    let pid = supervisor.restart().unwrap();
    assert_eq!(supervisor.state(), DaemonState::Running(pid));

    supervisor.stop();
    assert!(wait_until_gone(pid));
}

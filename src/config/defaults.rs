use super::{Config, DaemonConfig, FileConfig, RestartConfig};

pub fn default_config() -> Config {
    Config {
        daemon: default_daemon_config(),
        files: default_file_config(),
        restart: default_restart_config(),
    }
}

pub fn default_daemon_config() -> DaemonConfig {
    DaemonConfig {
        command: "/usr/local/bin/omsd".to_string(),
        args: vec![],
        worker_pattern: "omsd-worker".to_string(),
    }
}

pub fn default_file_config() -> FileConfig {
    FileConfig {
        pid_file: default_runtime_dir()
            .join("vigil.pid")
            .to_string_lossy()
            .to_string(),
    }
}

pub fn default_restart_config() -> RestartConfig {
    RestartConfig {
        // The classic init-script gap between stop and start
        grace_period_secs: 1,
        wait_for_exit: true,
        wait_timeout_secs: 5,
    }
}

pub fn default_runtime_dir() -> std::path::PathBuf {
    std::env::var("XDG_RUNTIME_DIR")
        .ok()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from("/tmp"))
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "vigil") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| String::from("."));
        std::path::PathBuf::from(home).join(".config").join("vigil")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var("VIGIL_CONFIG_PATH") {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_creation() {
        let config = default_config();
        assert!(!config.daemon.command.is_empty());
        assert!(config.daemon.args.is_empty());
        assert!(config.files.pid_file.ends_with("vigil.pid"));
        assert_eq!(config.restart.grace_period_secs, 1);
        assert!(config.restart.wait_for_exit);
    }

    #[test]
    fn test_config_paths() {
        // Basic properties only, no global state mutation, so this stays
        // safe under parallel test execution
        let config_file = get_config_file_path();
        assert!(config_file.ends_with("config.json"));
        assert!(config_file.parent().is_some());
    }
}

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub script_path: Option<PathBuf>,
    /// Mirror logs into a daily rolling file under `log_dir`.
    pub file_logs: bool,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            script_path: None,
            file_logs: false,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let log_level = std::env::var("RUST_LOG").unwrap_or(defaults.log_level);

        let script_path = std::env::var("AMARA_SCRIPT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let file_logs = std::env::var("ENABLE_FILE_LOGS")
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.file_logs);

        let log_dir = std::env::var("LOG_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        Self {
            log_level,
            script_path,
            file_logs,
            log_dir,
        }
    }

    /// A path given on the command line wins over `AMARA_SCRIPT`.
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(path) = args.next().filter(|a| !a.trim().is_empty()) {
            self.script_path = Some(PathBuf::from(path));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_env_script() -> Config {
        Config {
            script_path: Some(PathBuf::from("from_env.json")),
            ..Default::default()
        }
    }

    #[test]
    fn cli_argument_overrides_script_path() {
        let config = with_env_script().with_args(vec!["cli.json".to_string()].into_iter());
        assert_eq!(config.script_path, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn missing_argument_keeps_env_path() {
        let config = with_env_script().with_args(std::iter::empty());
        assert_eq!(config.script_path, Some(PathBuf::from("from_env.json")));
    }

    #[test]
    fn file_log_flag_values() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("ON"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn file_logs_off_by_default() {
        let config = Config::default();
        assert!(!config.file_logs);
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
    }
}

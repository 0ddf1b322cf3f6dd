//! Runtime configuration.
//!
//! Layers, later wins: built-in defaults, an optional TOML file, environment
//! variables, then command-line flags.
//!
//! ```toml
//! data_file = "students.txt"
//! sync_on_write = true
//! log_filter = "warn"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the data file path.
pub const ENV_DATA_FILE: &str = "ROSTER_DATA_FILE";

/// Environment variable overriding the log filter.
pub const ENV_LOG: &str = "ROSTER_LOG";

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "students.txt";

/// Errors raised while assembling the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },

    #[error("{0}")]
    Usage(String),
}

/// Configuration for a roster session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path of the flat file holding the records.
    pub data_file: PathBuf,
    /// Whether to fsync after every save (slower but safer).
    pub sync_on_write: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            sync_on_write: true,
            log_filter: "warn".to_string(),
        }
    }
}

/// On-disk shape of the TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    data_file: Option<PathBuf>,
    sync_on_write: Option<bool>,
    log_filter: Option<String>,
}

impl RosterConfig {
    /// Overlays the settings found in a TOML file.
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.merge_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn merge_toml(mut self, text: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(text)?;
        if let Some(data_file) = file.data_file {
            self.data_file = data_file;
        }
        if let Some(sync) = file.sync_on_write {
            self.sync_on_write = sync;
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = filter;
        }
        Ok(self)
    }

    /// Overlays environment variables, looked up through `lookup`.
    #[must_use]
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(ENV_DATA_FILE).filter(|v| !v.is_empty()) {
            self.data_file = PathBuf::from(path);
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            self.log_filter = filter;
        }
        self
    }

    /// Checks the assembled configuration.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "data_file",
                reason: "must not be empty".to_string(),
            });
        }
        if self.data_file.is_dir() {
            return Err(ConfigError::Invalid {
                field: "data_file",
                reason: format!("{} is a directory", self.data_file.display()),
            });
        }
        Ok(self)
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Start a session with this configuration.
    Run(RosterConfig),
    /// Print usage and exit.
    Help,
    /// Print the version and exit.
    Version,
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
roster - role-based student roster

USAGE:
    roster [OPTIONS]

OPTIONS:
    -f, --data-file <PATH>    Data file [default: students.txt, env: ROSTER_DATA_FILE]
    -c, --config <PATH>       TOML configuration file
        --no-sync             Do not fsync after each save
    -h, --help                Print help information
    -V, --version             Print version information";

/// Builds the configuration from command-line arguments (without the program
/// name) and an environment lookup.
///
/// The config file, if any, is applied first so that environment variables
/// and the remaining flags override it.
pub fn parse_args<I, S>(
    args: I,
    env: impl Fn(&str) -> Option<String>,
) -> Result<CliAction, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();

    let mut config_file: Option<PathBuf> = None;
    let mut data_file: Option<PathBuf> = None;
    let mut no_sync = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data-file" | "-f" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| ConfigError::Usage("--data-file requires a value".to_string()))?;
                data_file = Some(PathBuf::from(value));
                i += 2;
            }
            "--config" | "-c" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| ConfigError::Usage("--config requires a value".to_string()))?;
                config_file = Some(PathBuf::from(value));
                i += 2;
            }
            "--no-sync" => {
                no_sync = true;
                i += 1;
            }
            "--help" | "-h" => return Ok(CliAction::Help),
            "--version" | "-V" => return Ok(CliAction::Version),
            arg => return Err(ConfigError::Usage(format!("unknown argument: {arg}"))),
        }
    }

    let mut config = RosterConfig::default();
    if let Some(path) = config_file {
        config = config.merge_file(&path)?;
    }
    config = config.merge_env(env);
    if let Some(path) = data_file {
        config.data_file = path;
    }
    if no_sync {
        config.sync_on_write = false;
    }

    Ok(CliAction::Run(config.validate()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(action: CliAction) -> RosterConfig {
        match action {
            CliAction::Run(config) => config,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run(parse_args(Vec::<String>::new(), no_env).unwrap());
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.data_file, PathBuf::from("students.txt"));
        assert!(config.sync_on_write);
    }

    #[test]
    fn test_flags() {
        let config = run(parse_args(["-f", "class.txt", "--no-sync"], no_env).unwrap());
        assert_eq!(config.data_file, PathBuf::from("class.txt"));
        assert!(!config.sync_on_write);
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(["--help"], no_env).unwrap(), CliAction::Help);
        assert_eq!(parse_args(["-V"], no_env).unwrap(), CliAction::Version);
    }

    #[test]
    fn test_missing_value_is_usage_error() {
        let err = parse_args(["--data-file"], no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Usage(_)));
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_args(["--verbose"], no_env).unwrap_err();
        assert!(err.to_string().contains("--verbose"));
    }

    #[test]
    fn test_env_overrides_default_but_not_flag() {
        let env = |key: &str| match key {
            ENV_DATA_FILE => Some("env.txt".to_string()),
            ENV_LOG => Some("debug".to_string()),
            _ => None,
        };

        let config = run(parse_args(Vec::<String>::new(), env).unwrap());
        assert_eq!(config.data_file, PathBuf::from("env.txt"));
        assert_eq!(config.log_filter, "debug");

        let config = run(parse_args(["-f", "flag.txt"], env).unwrap());
        assert_eq!(config.data_file, PathBuf::from("flag.txt"));
    }

    #[test]
    fn test_config_file_is_applied_before_env() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        fs::write(
            &path,
            "data_file = \"file.txt\"\nsync_on_write = false\nlog_filter = \"info\"\n",
        )
        .unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let config = run(parse_args(["-c", path_arg.as_str()], no_env).unwrap());
        assert_eq!(config.data_file, PathBuf::from("file.txt"));
        assert!(!config.sync_on_write);
        assert_eq!(config.log_filter, "info");

        let env = |key: &str| (key == ENV_DATA_FILE).then(|| "env.txt".to_string());
        let config = run(parse_args(["-c", path_arg.as_str()], env).unwrap());
        assert_eq!(config.data_file, PathBuf::from("env.txt"));
    }

    #[test]
    fn test_config_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        fs::write(&path, "colour = \"blue\"\n").unwrap();

        let err = RosterConfig::default().merge_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let err = RosterConfig::default()
            .merge_file(&dir.path().join("absent.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_validate_rejects_empty_and_directory() {
        let empty = RosterConfig {
            data_file: PathBuf::new(),
            ..RosterConfig::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::Invalid { .. })));

        let dir = tempdir().unwrap();
        let directory = RosterConfig {
            data_file: dir.path().to_path_buf(),
            ..RosterConfig::default()
        };
        assert!(directory.validate().is_err());
    }
}

//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`GREETER_DEFAULTS__NAME`, ...)
//! 3. Config file (`--config`, else `./.greeter.toml`, else the global file)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use greeter_core::domain::{DEMO_AGE, DEMO_NAME};

use crate::cli::OutputFormat;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".greeter.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "GREETER";

/// Keys accepted by `greeter config get`.
pub const CONFIG_KEYS: [&str; 4] = [
    "defaults.name",
    "defaults.age",
    "output.no_color",
    "output.format",
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// User greeted by `greeter greet` when flags are omitted.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                name: DEMO_NAME.into(),
                age: DEMO_AGE,
            },
            output: OutputConfig {
                no_color: false,
                format: OutputFormat::Auto,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the discovered file (if any) is used.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, Self::environment())
    }

    /// `GREETER_DEFAULTS__NAME` style overrides.
    ///
    /// Values stay strings; typed fields are parsed on deserialize, so a
    /// name like `007` is kept as written.
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_with_env(config_file: Option<&PathBuf>, env: Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("defaults.name", defaults.defaults.name.as_str())?
            .set_default("defaults.age", i64::from(defaults.defaults.age))?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format.as_str())?;

        match config_file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Using explicit config file");
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                if let Some(path) = Self::discover() {
                    tracing::debug!(path = %path.display(), "Using discovered config file");
                    builder = builder.add_source(File::from(path.as_path()).required(false));
                }
            }
        }

        builder
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.greeter.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "greeter", "greeter")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path of the local configuration file under `dir`.
    pub fn local_path(dir: &Path) -> PathBuf {
        dir.join(LOCAL_CONFIG_FILE)
    }

    /// The file `load` reads when no `--config` is given, if one exists.
    pub fn discover() -> Option<PathBuf> {
        let local = std::env::current_dir()
            .map(|dir| Self::local_path(&dir))
            .ok()
            .filter(|p| p.is_file());
        local.or_else(|| Some(Self::config_path()).filter(|p| p.is_file()))
    }

    /// The file that is, or would be, in effect.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file
            .cloned()
            .or_else(Self::discover)
            .unwrap_or_else(Self::config_path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn default_user_is_alice() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.name, "Alice");
        assert_eq!(cfg.defaults.age, 30);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeter.toml");
        fs::write(&path, "[defaults]\nname = \"Bob\"\nage = 41\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.name, "Bob");
        assert_eq!(cfg.defaults.age, 41);
        // untouched sections keep their defaults
        assert_eq!(cfg.output.format, OutputFormat::Auto);
    }

    #[test]
    fn output_format_reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeter.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn negative_age_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greeter.toml");
        fs::write(&path, "[defaults]\nage = -1\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    fn load_with_vars(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let source = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::load_with_env(Some(&path), AppConfig::environment().source(Some(source)))
    }

    #[test]
    fn env_name_is_kept_verbatim() {
        for name in ["007", "1.50", "True"] {
            let cfg = load_with_vars(&[("GREETER_DEFAULTS__NAME", name)]).unwrap();
            assert_eq!(cfg.defaults.name, name);
        }
    }

    #[test]
    fn env_typed_fields_still_parse() {
        let cfg = load_with_vars(&[
            ("GREETER_DEFAULTS__AGE", "41"),
            ("GREETER_OUTPUT__NO_COLOR", "true"),
            ("GREETER_OUTPUT__FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(cfg.defaults.age, 41);
        assert!(cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn env_bad_age_is_error() {
        assert!(load_with_vars(&[("GREETER_DEFAULTS__AGE", "old")]).is_err());
    }

    #[test]
    fn active_path_prefers_explicit() {
        let p = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(AppConfig::active_path(Some(&p)), p);
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}

//! Error handling for the greeter CLI.
//!
//! Every failure ends up as a [`CliError`], which knows its exit code and
//! renders itself for stderr as
//!
//! ```text
//! error: <message>
//!   caused by: <source>      (only with -v)
//!   hint: <suggestion>
//! ```

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use greeter_core::error::{ErrorCategory as CoreCategory, GreeterError};

use crate::config::CONFIG_KEYS;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

type BoxedSource = Box<dyn Error + Send + Sync>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// `config get` was asked for a key that does not exist.
    #[error("Unknown config key: '{key}'")]
    UnknownConfigKey { key: String },

    /// A greeting could not be built or written.
    #[error("Greeting failed: {0}")]
    Core(#[from] GreeterError),

    /// A report or config listing could not be encoded.
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// What the user can do about it.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Run 'greeter config path' to see which file is read".into(),
                "Run 'greeter init --force' to start from the defaults".into(),
            ],
            Self::UnknownConfigKey { .. } => {
                vec![format!("Known keys: {}", CONFIG_KEYS.join(", "))]
            }
            Self::Core(core) => core.suggestions(),
            Self::Serialization { .. } => vec!["This is a bug in greeter, please report it".into()],
            Self::IoError { .. } => vec!["Check that the path exists and is writable".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Serialization { .. } | Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for stderr. `verbose` adds the source chain; `color` adds ANSI.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };
        let hint = paint("hint:", Style::new().yellow().bold());

        let mut out = String::new();
        let _ = writeln!(out, "{} {self}", paint("error:", Style::new().red().bold()));

        if verbose {
            for cause in self.causes() {
                let _ = writeln!(out, "  {} {cause}", paint("caused by:", Style::new().dimmed()));
            }
        }

        for suggestion in self.suggestions() {
            let _ = writeln!(out, "  {hint} {suggestion}");
        }

        if !verbose && self.source().is_some() {
            let _ = writeln!(out, "  {hint} rerun with -v to see what caused this");
        }

        out
    }

    /// Record the failure as a single tracing event.
    pub fn log(&self) {
        let category = self.category();
        let exit_code = self.exit_code();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, exit_code, "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, exit_code, "{self}");
            }
        }
    }

    fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected input.
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Attach a call-site message to a file-system or encoding failure.
pub trait IntoCli<T> {
    fn with_cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T>;
}

impl<T> IntoCli<T> for std::io::Result<T> {
    fn with_cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T> {
        self.map_err(|source| CliError::IoError {
            message: message().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, serde_json::Error> {
    fn with_cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T> {
        self.map_err(|source| CliError::Serialization {
            message: message().into(),
            source: Box::new(source),
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T> {
        self.map_err(|source| CliError::Serialization {
            message: message().into(),
            source: Box::new(source),
        })
    }
}

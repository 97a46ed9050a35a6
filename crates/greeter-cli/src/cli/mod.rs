//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "greeter",
    bin_name = "greeter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Say hello to a user record",
    long_about = "Greeter builds a user record (name and age) and prints a \
                  greeting for it.  With no subcommand it greets Alice.",
    after_help = "EXAMPLES:\n\
        \x20 greeter\n\
        \x20 greeter greet --name Bob --age 41\n\
        \x20 greeter --output-format json run\n\
        \x20 greeter completions bash > /usr/share/bash-completion/completions/greeter",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Greet the built-in record (Alice, 30).
    #[command(about = "Greet the demo user (default)")]
    Run,

    /// Greet a user given on the command line or in configuration.
    #[command(
        visible_alias = "g",
        about = "Greet a user",
        after_help = "EXAMPLES:\n\
            \x20 greeter greet --name Bob\n\
            \x20 greeter greet -n Carol -a 52\n\
            \x20 GREETER_DEFAULTS__NAME=Dave greeter greet"
    )]
    Greet(GreetArgs),

    /// Initialise a greeter configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 greeter init           # global config\n\
            \x20 greeter init --local   # .greeter.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 greeter completions bash > ~/.local/share/bash-completion/completions/greeter\n\
            \x20 greeter completions zsh  > ~/.zfunc/_greeter\n\
            \x20 greeter completions fish > ~/.config/fish/completions/greeter.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the greeter configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 greeter config get defaults.name\n\
            \x20 greeter config list\n\
            \x20 greeter config path"
    )]
    Config(ConfigCommands),
}

// ── greet ─────────────────────────────────────────────────────────────────────

/// Arguments for `greeter greet`.
#[derive(Debug, Args)]
pub struct GreetArgs {
    /// Name to greet; falls back to `defaults.name`.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Name to greet")]
    pub name: Option<String>,

    /// Age of the user; falls back to `defaults.age`.
    #[arg(short = 'a', long = "age", value_name = "AGE", help = "Age of the user")]
    pub age: Option<u32>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `greeter init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.greeter.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `greeter completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `greeter config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

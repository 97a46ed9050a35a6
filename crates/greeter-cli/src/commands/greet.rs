//! `greeter greet`: greet a user from flags, falling back to config.

use greeter_adapters::StdoutWriter;
use greeter_core::domain::User;
use tracing::debug;

use crate::{cli::GreetArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: GreetArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let user = resolve_user(args, &config)?;
    debug!(%user, "Greeting user");
    super::deliver(&user, output.format(), Box::new(StdoutWriter::new()))
}

/// Flags win over config defaults; the result is validated.
fn resolve_user(args: GreetArgs, config: &AppConfig) -> CliResult<User> {
    let name = args.name.unwrap_or_else(|| config.defaults.name.clone());
    let age = args.age.unwrap_or(config.defaults.age);

    let user = User::builder()
        .name(name)
        .age(age)
        .build()
        .map_err(greeter_core::error::GreeterError::from)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn args(name: Option<&str>, age: Option<u32>) -> GreetArgs {
        GreetArgs {
            name: name.map(str::to_owned),
            age,
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let user = resolve_user(args(None, None), &AppConfig::default()).unwrap();
        assert_eq!(user, User::demo());
    }

    #[test]
    fn flags_override_config() {
        let user = resolve_user(args(Some("Bob"), Some(41)), &AppConfig::default()).unwrap();
        assert_eq!(user.name(), "Bob");
        assert_eq!(user.age(), 41);
    }

    #[test]
    fn partial_flags_mix_with_config() {
        let mut cfg = AppConfig::default();
        cfg.defaults.age = 7;
        let user = resolve_user(args(Some("Carol"), None), &cfg).unwrap();
        assert_eq!(user, User::new("Carol", 7));
    }

    #[test]
    fn blank_name_is_user_error() {
        let err = resolve_user(args(Some("  "), None), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 2);
    }
}

//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod greet;
pub mod init;
pub mod run;

use greeter_core::{
    application::{GreetingService, ports::GreetingWriter},
    domain::User,
};

use crate::{
    cli::OutputFormat,
    error::{CliResult, IntoCli},
};

/// Greet `user` through `writer`, rendered for `format`.
///
/// Human and plain output are the bare greeting line; JSON is the whole
/// report on one line.
pub(crate) fn deliver(
    user: &User,
    format: OutputFormat,
    writer: Box<dyn GreetingWriter>,
) -> CliResult<()> {
    let service = GreetingService::new(writer);

    match format {
        OutputFormat::Json => {
            let report = service.compose(user);
            let json = serde_json::to_string(&report)
                .with_cli_context(|| format!("Failed to encode the report for {user}"))?;
            service.publish(&json)?;
        }
        OutputFormat::Auto | OutputFormat::Human | OutputFormat::Plain => {
            service.greet(user)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use greeter_adapters::MemoryWriter;

    use super::*;

    #[test]
    fn plain_format_writes_bare_greeting() {
        let writer = MemoryWriter::new();
        deliver(&User::demo(), OutputFormat::Plain, Box::new(writer.clone())).unwrap();
        assert_eq!(writer.contents().unwrap(), "Hello, Alice!\n");
    }

    #[test]
    fn human_format_matches_plain() {
        let writer = MemoryWriter::new();
        deliver(&User::demo(), OutputFormat::Human, Box::new(writer.clone())).unwrap();
        assert_eq!(writer.lines().unwrap(), vec!["Hello, Alice!"]);
    }

    #[test]
    fn json_format_writes_one_report_line() {
        let writer = MemoryWriter::new();
        deliver(&User::new("Bob", 41), OutputFormat::Json, Box::new(writer.clone())).unwrap();

        let lines = writer.lines().unwrap();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["greeting"], "Hello, Bob!");
        assert_eq!(value["age"], 41);
    }
}

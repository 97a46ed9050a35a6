//! `greeter run`: greet the built-in record. Also the default command.

use greeter_adapters::StdoutWriter;
use greeter_core::domain::User;
use tracing::debug;

use crate::{error::CliResult, output::OutputManager};

/// Print the greeting for Alice, 30.
pub fn execute(output: OutputManager) -> CliResult<()> {
    let user = User::demo();
    debug!(%user, "Greeting demo user");
    super::deliver(&user, output.format(), Box::new(StdoutWriter::new()))
}

//! Process stdout adapter using std::io.

use std::io::{self, Write};

use greeter_core::{
    application::{ApplicationError, ports::GreetingWriter},
    error::{GreeterError, GreeterResult},
};

/// Production writer: one line per call on the process's standard output.
#[derive(Debug, Clone, Copy)]
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingWriter for StdoutWriter {
    fn write_line(&self, line: &str) -> GreeterResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}").map_err(|e| map_io_error(e, "write line"))?;
        out.flush().map_err(|e| map_io_error(e, "flush stdout"))
    }
}

fn map_io_error(e: io::Error, operation: &str) -> GreeterError {
    tracing::debug!(error = %e, operation, "stdout write failed");
    ApplicationError::WriteFailed {
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_become_write_failed() {
        let err = map_io_error(
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
            "write line",
        );
        match err {
            GreeterError::Application(ApplicationError::WriteFailed { reason }) => {
                assert!(reason.contains("write line"));
                assert!(reason.contains("pipe closed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

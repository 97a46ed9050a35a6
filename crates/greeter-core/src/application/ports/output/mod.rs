//! Driven (output) ports - implemented by infrastructure.

use crate::error::GreeterResult;

/// Port for delivering rendered lines.
///
/// Implemented by:
/// - `greeter_adapters::writer::StdoutWriter` (production)
/// - `greeter_adapters::writer::MemoryWriter` (testing)
///
/// Implementations append the line terminator themselves; `line` never
/// contains one.
#[cfg_attr(test, mockall::automock)]
pub trait GreetingWriter: Send + Sync {
    /// Write one line of output.
    fn write_line(&self, line: &str) -> GreeterResult<()>;
}

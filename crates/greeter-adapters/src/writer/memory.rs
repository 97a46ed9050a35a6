//! In-memory writer adapter for testing.

use std::sync::{Arc, RwLock};

use greeter_core::{
    application::{ApplicationError, ports::GreetingWriter},
    error::GreeterResult,
};

/// In-memory writer for testing. Clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemoryWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line written so far, oldest first.
    pub fn lines(&self) -> GreeterResult<Vec<String>> {
        let lines = self
            .lines
            .read()
            .map_err(|_| ApplicationError::WriterLockError)?;
        Ok(lines.clone())
    }

    /// The buffer rendered the way stdout would show it.
    pub fn contents(&self) -> GreeterResult<String> {
        Ok(self
            .lines()?
            .iter()
            .map(|line| format!("{line}\n"))
            .collect())
    }

    /// Clear all contents.
    pub fn clear(&self) -> GreeterResult<()> {
        self.lines
            .write()
            .map_err(|_| ApplicationError::WriterLockError)?
            .clear();
        Ok(())
    }
}

impl GreetingWriter for MemoryWriter {
    fn write_line(&self, line: &str) -> GreeterResult<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|_| ApplicationError::WriterLockError)?;
        lines.push(line.to_owned());
        Ok(())
    }
}

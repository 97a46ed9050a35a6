//! Greeting Service - the greet use case.
//!
//! Turns a [`User`] into a greeting and hands it to a [`GreetingWriter`].

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{application::ports::GreetingWriter, domain::User, error::GreeterResult};

/// Everything known about one greeting, ready for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GreetingReport {
    pub name: String,
    pub age: u32,
    pub greeting: String,
}

/// Service for delivering greetings.
pub struct GreetingService {
    writer: Box<dyn GreetingWriter>,
}

impl GreetingService {
    /// Create a new greeting service writing to `writer`.
    pub fn new(writer: Box<dyn GreetingWriter>) -> Self {
        Self { writer }
    }

    /// Build the report for `user` without writing anything.
    pub fn compose(&self, user: &User) -> GreetingReport {
        let report = GreetingReport {
            name: user.name().to_owned(),
            age: user.age(),
            greeting: user.greet(),
        };
        debug!(greeting = %report.greeting, "Composed greeting");
        report
    }

    /// Compose the greeting for `user` and write it as one line.
    #[instrument(skip_all, fields(user = %user))]
    pub fn greet(&self, user: &User) -> GreeterResult<GreetingReport> {
        let report = self.compose(user);
        self.writer.write_line(&report.greeting)?;
        info!("Greeting delivered");
        Ok(report)
    }

    /// Write an already rendered line, e.g. a serialised report.
    pub fn publish(&self, line: &str) -> GreeterResult<()> {
        self.writer.write_line(line)
    }
}

//! Application layer for greeter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GreetingService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GreetingReport, GreetingService};

pub use ports::GreetingWriter;

pub use error::ApplicationError;

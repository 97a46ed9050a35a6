//! Core domain layer for greeter.
//!
//! Pure business logic: the [`User`] record, its greeting, and the rules a
//! user-supplied record must satisfy. No I/O happens here; writing a greeting
//! anywhere is the application layer's job.

pub mod entities;
pub mod error;

mod validation;

pub use entities::user::{DEMO_AGE, DEMO_NAME, User, UserBuilder};
pub use error::DomainError;
pub use validation::DomainValidator;

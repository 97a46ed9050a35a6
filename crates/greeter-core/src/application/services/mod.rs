//! Application services - use case orchestration.
//!
//! Services coordinate domain logic and ports but contain no business rules
//! themselves.

pub mod greeting_service;

pub use greeting_service::{GreetingReport, GreetingService};

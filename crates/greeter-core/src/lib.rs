//! Greeter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the greeter
//! tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           greeter-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GreetingService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (GreetingWriter)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     greeter-adapters (Infrastructure)   │
//! │     (StdoutWriter, MemoryWriter)        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │                 (User)                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use greeter_core::domain::User;
//!
//! let user = User::new("Alice", 30);
//! assert_eq!(user.greet(), "Hello, Alice!");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GreetingReport, GreetingService, ports::GreetingWriter};
    pub use crate::domain::{DEMO_AGE, DEMO_NAME, User, UserBuilder};
    pub use crate::error::{GreeterError, GreeterResult};
}

//! Infrastructure adapters for greeter.
//!
//! This crate implements the ports defined in `greeter-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod writer;

// Re-export commonly used adapters
pub use writer::{MemoryWriter, StdoutWriter};

//! The `User` record and its builder.
//!
//! A `User` is a plain value object: a name and an age, with one derived
//! operation, [`User::greet`]. Fields are private and there are no setters,
//! so a `User` never changes after construction.
//!
//! Two constructors exist:
//! - [`User::new`] stores its inputs verbatim and cannot fail.
//! - [`User::try_new`] (and the builder) validate the name first; use these
//!   for anything typed in by a person.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use crate::domain::{error::DomainError, validation::DomainValidator};

/// Name of the record the default run greets.
pub const DEMO_NAME: &str = "Alice";
/// Age of the record the default run greets.
pub const DEMO_AGE: u32 = 30;

// ── Record ────────────────────────────────────────────────────────────────────

/// A person with a name and an age.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    name: String,
    age: u32,
}

impl User {
    /// Create a user holding `name` and `age` exactly as given.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Create a user, rejecting names that cannot be greeted on one line.
    pub fn try_new(name: impl Into<String>, age: u32) -> Result<Self, DomainError> {
        let user = Self::new(name, age);
        user.validate()?;
        Ok(user)
    }

    /// The record printed by the default run: Alice, 30.
    pub fn demo() -> Self {
        Self::new(DEMO_NAME, DEMO_AGE)
    }

    /// Start building a new `User`.
    pub fn builder() -> UserBuilder {
        UserBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn age(&self) -> u32 {
        self.age
    }

    /// `"Hello, {name}!"` with the stored name embedded unchanged.
    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }

    /// Re-check the name rules. Called by `try_new` and the builder.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::validate_name(&self.name)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`User`]. Both fields are required.
#[derive(Debug, Default, Clone)]
pub struct UserBuilder {
    name: Option<String>,
    age: Option<u32>,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Build and validate the `User`.
    pub fn build(self) -> Result<User, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let age = self
            .age
            .ok_or(DomainError::MissingRequiredField { field: "age" })?;
        User::try_new(name, age)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

/// The kind of entity an operation failed on, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Module,
    SemesterPlan,
    RequirementCategory,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Module => "module",
            EntityKind::SemesterPlan => "semester plan",
            EntityKind::RequirementCategory => "requirement category",
        };
        f.write_str(name)
    }
}

/// Domain errors represent business rule violations.
/// These are independent of parsing and storage concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A raw string failed a value type's validation rule.
    /// The message is the value type's constraint text, verbatim.
    #[error("{message}")]
    InvalidValue { message: &'static str },

    /// An entity with the same identity is already stored.
    #[error("this {kind} already exists in the planner")]
    DuplicateEntity { kind: EntityKind },

    /// No stored entity matched the requested one.
    #[error("{kind} not found")]
    EntityNotFound { kind: EntityKind },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

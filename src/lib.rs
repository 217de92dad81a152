//! modplan: single-user degree planner core
//!
//! Tracks university modules, a multi-year degree plan and requirement
//! categories, driven by a typed command language. Layers:
//!
//! - `domain`: self-validating value types, entities, and the
//!   identity-unique collection
//! - `application`: the aggregate store, command parser/objects and the
//!   execution coordinator with dirty-tracked persistence
//! - `infrastructure`: filesystem boundary traits and JSON storage
//! - `cli`: the interactive prompt

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{CommandExecutor, CommandHistory, CommandResult, PlannerStore, Snapshot};
pub use domain::{DomainError, Module, RequirementCategory, SemesterPlan};

//! schemaguard-core: declarative schema SQL linting library
//!
//! This library provides the core functionality for checking SQL text
//! meant as a declarative schema definition, flagging destructive and
//! non-idempotent constructs without parsing or touching a database.

pub mod error;
pub mod linter;
pub mod rules;
pub mod sanitize;

pub use error::{Diagnostic, RuleCode};
pub use linter::{validate, Linter};
pub use rules::{Rule, REGISTRY};
pub use sanitize::neutralize_comments;

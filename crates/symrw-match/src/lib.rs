//! Pattern matching, binding extraction, substitution, and predicates.

pub mod bindings;
pub mod matcher;
pub mod pattern;
pub mod predicate;
pub mod substitute;

pub use bindings::Bindings;
pub use matcher::{extract, matches};
pub use pattern::{Pattern, PatternVar, VarId};
pub use predicate::Predicate;
pub use substitute::substitute;

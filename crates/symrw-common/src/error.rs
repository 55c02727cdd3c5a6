//! Error types for the symbolic rewriting engine.
//!
//! Mirrors the shape of the teacher compiler's error types: a plain enum,
//! a hand-written [`fmt::Display`], and [`std::error::Error`]. No
//! `thiserror`/`anyhow` — the engine has few enough error cases that the
//! boilerplate buys nothing.

use std::fmt;

/// An error raised while numerically evaluating an expression.
///
/// Structural mistakes (wrong arity, mismatched operator) are caught by
/// Rust's own type system at construction time and never reach this
/// type; `SymbolicError` only covers domain errors that can only be
/// known once concrete numeric values are supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicError {
    /// A `Symbol` had no entry in the evaluation environment.
    UnboundSymbol(String),
    /// Division produced an undefined result (denominator evaluated to zero).
    DivisionByZero,
    /// An operation is undefined for the given operands (e.g. `0^0`,
    /// `log` of a non-positive number).
    DomainError(String),
}

impl fmt::Display for SymbolicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundSymbol(name) => write!(f, "unbound symbol: {name}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::DomainError(msg) => write!(f, "domain error: {msg}"),
        }
    }
}

impl std::error::Error for SymbolicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SymbolicError::UnboundSymbol("x".into()).to_string(),
            "unbound symbol: x"
        );
        assert_eq!(SymbolicError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            SymbolicError::DomainError("log of non-positive".into()).to_string(),
            "domain error: log of non-positive"
        );
    }
}

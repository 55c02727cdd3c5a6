//! Shared identity and error types for the symbolic rewriting engine.

pub mod error;
pub mod ident;

pub use error::SymbolicError;
pub use ident::TypeId;

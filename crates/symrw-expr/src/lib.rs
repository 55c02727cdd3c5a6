//! Expression representation: symbols, numeric leaves, the operator
//! vocabulary, the expression tree itself, its total ordering, display,
//! and numeric evaluation.

pub mod display;
pub mod evaluate;
pub mod expr;
pub mod number;
pub mod op;
pub mod ordering;
pub mod symbol;

pub use evaluate::{evaluate, Env};
pub use expr::{
    atan2, acos, asin, atan, cos, cosh, exp, log, sin, sinh, sqrt, tan, tanh, Expr, FracLiteral,
    IntoExprLiteral,
};
pub use number::{reduce_division, Constant, Fraction, Reduced};
pub use op::{DisplayMode, Op, Precedence};
pub use ordering::compare;
pub use symbol::Symbol;

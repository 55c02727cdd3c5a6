//! Numeric evaluation: substitute a binding for every free symbol and
//! fold the tree down to an `f64` (`spec.md` §4.8).

use rustc_hash::FxHashMap;

use crate::expr::Expr;
use crate::symbol::Symbol;
use symrw_common::SymbolicError;

/// A symbol-to-value binding used to evaluate an expression numerically.
#[derive(Clone, Debug, Default)]
pub struct Env {
    values: FxHashMap<Symbol, f64>,
}

impl Env {
    pub fn new() -> Self {
        Env::default()
    }

    pub fn bind(mut self, sym: Symbol, value: f64) -> Self {
        self.values.insert(sym, value);
        self
    }

    pub fn get(&self, sym: &Symbol) -> Option<f64> {
        self.values.get(sym).copied()
    }
}

/// Evaluate `expr` to a single `f64`, resolving symbols against `env`.
///
/// Returns [`SymbolicError::UnboundSymbol`] for any symbol not present in
/// `env`, and propagates the domain errors `Op::operator` can raise
/// (division by zero, `0^0`, `sqrt` of a negative number, ...).
pub fn evaluate(expr: &Expr, env: &Env) -> Result<f64, SymbolicError> {
    match expr {
        Expr::Symbol(s) => env
            .get(s)
            .ok_or_else(|| SymbolicError::UnboundSymbol(s.name().to_string())),
        Expr::Constant(c) => Ok(c.as_f64()),
        Expr::Fraction(frac) => Ok(frac.as_f64()),
        Expr::Node(op, args) => {
            let values = args
                .iter()
                .map(|a| evaluate(a, env))
                .collect::<Result<Vec<f64>, SymbolicError>>()?;
            op.operator(&values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{sin, IntoExprLiteral};

    #[test]
    fn evaluates_constants_and_arithmetic() {
        let e = 2i64.c() + 3i64.c() * 4i64.c();
        assert_eq!(evaluate(&e, &Env::new()).unwrap(), 14.0);
    }

    #[test]
    fn resolves_bound_symbols() {
        let x = Symbol::new("x_eval");
        let env = Env::new().bind(x, 5.0);
        let e = Expr::from(x) + 1i64.c();
        assert_eq!(evaluate(&e, &env).unwrap(), 6.0);
    }

    #[test]
    fn unbound_symbol_is_an_error() {
        let x = Symbol::new("x_eval_unbound");
        let err = evaluate(&Expr::from(x), &Env::new()).unwrap_err();
        assert!(matches!(err, SymbolicError::UnboundSymbol(_)));
    }

    #[test]
    fn propagates_domain_errors() {
        let e = sin(1i64.c()) / 0i64.c();
        assert!(evaluate(&e, &Env::new()).is_err());
    }
}

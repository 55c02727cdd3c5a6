//! Constant folding (`spec.md` §4.7 "Constant folding").
//!
//! When every argument of a node is a constant or fraction, fold by
//! evaluating the operator. Exact integer/rational arithmetic is used
//! for `Add`/`Sub`/`Mul`/`Div`/integer `Pow` so that, e.g., `1/3 + 1/3`
//! folds to the exact fraction `2/3` rather than a lossy float; every
//! other operator falls back to `Op::operator`'s `f64` semantics.
//! Division by zero and other domain errors (see `symrw_expr::op`)
//! leave the node unrewritten rather than folding it.

use symrw_expr::{Constant, Expr, Fraction, Op};

use crate::context::{Context, Tag};
use crate::strategy::Strategy;

fn as_fraction(e: &Expr) -> Option<Fraction> {
    match e {
        Expr::Constant(Constant::Int(n)) => Some(Fraction { num: *n, den: 1 }),
        Expr::Fraction(f) => Some(*f),
        _ => None,
    }
}

fn wrap_fraction(f: Fraction) -> Expr {
    if f.den == 1 {
        Expr::Constant(Constant::Int(f.num))
    } else {
        Expr::Fraction(f)
    }
}

fn try_exact_fold(op: Op, args: &[std::rc::Rc<Expr>]) -> Option<Expr> {
    let fracs: Option<Vec<Fraction>> = args.iter().map(|a| as_fraction(a)).collect();
    let fracs = fracs?;
    match (op, fracs.as_slice()) {
        (Op::Add, parts) => Some(wrap_fraction(
            parts.iter().copied().fold(Fraction { num: 0, den: 1 }, Fraction::add),
        )),
        (Op::Mul, parts) => Some(wrap_fraction(
            parts.iter().copied().fold(Fraction { num: 1, den: 1 }, Fraction::mul),
        )),
        (Op::Sub, [a, b]) => Some(wrap_fraction(a.add(b.neg()))),
        (Op::Div, [a, b]) => a.div(*b).map(wrap_fraction),
        (Op::Neg, [a]) => Some(wrap_fraction(a.neg())),
        (Op::Pow, [base, exp]) if exp.den == 1 => {
            if exp.num == 0 {
                if base.is_zero() {
                    None // 0^0: domain error, leave unrewritten
                } else {
                    Some(Expr::Constant(Constant::Int(1)))
                }
            } else if exp.num > 0 {
                let mut acc = Fraction { num: 1, den: 1 };
                for _ in 0..exp.num {
                    acc = acc.mul(*base);
                }
                Some(wrap_fraction(acc))
            } else {
                // Negative integer exponent: fall back to f64 (result is
                // exact only when `base` is itself a unit fraction, not
                // worth special-casing further here).
                None
            }
        }
        _ => None,
    }
}

/// `constant_folding()` as a `Strategy`: folds any node whose arguments
/// are all constants/fractions.
pub fn constant_folding() -> impl Strategy {
    |expr: &Expr, ctx: &Context| match expr {
        Expr::Node(op, args)
            if ctx.has_tag(Tag::ConstantFoldingEnabled)
                && !args.is_empty()
                && args.iter().all(|a| a.is_constant()) =>
        {
            if let Some(exact) = try_exact_fold(*op, args) {
                return exact;
            }
            let values: Vec<f64> = args
                .iter()
                .map(|a| match a.as_ref() {
                    Expr::Constant(c) => c.as_f64(),
                    Expr::Fraction(f) => f.as_f64(),
                    _ => unreachable!("guarded by is_constant above"),
                })
                .collect();
            match op.operator(&values) {
                Ok(v) => Expr::Constant(Constant::Float(v)),
                Err(_) => expr.clone(),
            }
        }
        _ => expr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{FracLiteral, IntoExprLiteral};

    #[test]
    fn folds_integer_addition() {
        let e = 2i64.c() + 3i64.c();
        assert_eq!(constant_folding().apply(&e, &Context::new()), 5i64.c());
    }

    #[test]
    fn folds_fraction_addition_exactly() {
        let e = 1i64.frac(3) + 1i64.frac(3);
        assert_eq!(constant_folding().apply(&e, &Context::new()), 2i64.frac(3));
    }

    #[test]
    fn exact_division_folds_to_constant() {
        let e = 6i64.c() / 2i64.c();
        assert_eq!(constant_folding().apply(&e, &Context::new()), 3i64.c());
    }

    #[test]
    fn inexact_division_folds_to_fraction() {
        let e = 1i64.c() / 3i64.c();
        assert_eq!(constant_folding().apply(&e, &Context::new()), 1i64.frac(3));
    }

    #[test]
    fn division_by_zero_is_left_unrewritten() {
        let e = 1i64.c() / 0i64.c();
        assert_eq!(constant_folding().apply(&e, &Context::new()), e);
    }

    #[test]
    fn zero_pow_zero_is_left_unrewritten() {
        let e = 0i64.c().pow(0i64.c());
        assert_eq!(constant_folding().apply(&e, &Context::new()), e);
    }

    #[test]
    fn transcendental_falls_back_to_float() {
        let e = symrw_expr::sin(0i64.c());
        let result = constant_folding().apply(&e, &Context::new());
        assert_eq!(result, Expr::Constant(Constant::Float(0.0)));
    }
}

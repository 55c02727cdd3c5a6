//! The total ordering over expressions (`spec.md` §4.5).
//!
//! Category comes first: `Expressions < Symbols < Constants` (Constants
//! here covering both [`Constant`](crate::number::Constant) and
//! [`Fraction`](crate::number::Fraction) leaves, which the spec treats as
//! one numeric category). Within a category, the rules in §4.5 apply.
//! The `Never` sentinel the spec places above everything never appears
//! as a live [`Expr`] value in this realization (see `SPEC_FULL.md` §4),
//! so there is nothing to special-case here.

use std::cmp::Ordering as StdOrdering;

use crate::expr::Expr;
use crate::number::{Constant, Fraction};

/// Category rank used for the coarse `Expressions < Symbols < Constants`
/// comparison.
fn category_rank(e: &Expr) -> u8 {
    match e {
        Expr::Node(..) => 0,
        Expr::Symbol(_) => 1,
        Expr::Constant(_) | Expr::Fraction(_) => 2,
    }
}

/// Compare two constant-category leaves (`Constant` or `Fraction`) by
/// numeric value, using exact cross-multiplication when both sides are
/// rational to avoid floating-point rounding (`spec.md` §4.5).
fn cmp_numeric(a: &Expr, b: &Expr) -> StdOrdering {
    match (a, b) {
        (Expr::Constant(Constant::Int(x)), Expr::Constant(Constant::Int(y))) => x.cmp(y),
        (Expr::Fraction(x), Expr::Fraction(y)) => x.cmp_cross(*y),
        (Expr::Fraction(x), Expr::Constant(Constant::Int(y))) => {
            x.cmp_cross(Fraction { num: *y, den: 1 })
        }
        (Expr::Constant(Constant::Int(x)), Expr::Fraction(y)) => {
            Fraction { num: *x, den: 1 }.cmp_cross(*y)
        }
        _ => as_f64(a)
            .partial_cmp(&as_f64(b))
            .unwrap_or(StdOrdering::Equal),
    }
}

fn as_f64(e: &Expr) -> f64 {
    match e {
        Expr::Constant(c) => c.as_f64(),
        Expr::Fraction(f) => f.as_f64(),
        _ => unreachable!("as_f64 called on non-numeric expression"),
    }
}

/// Compare two expressions under the strict total order from `spec.md`
/// §4.5. Exposed as a free function (in addition to `impl Ord for
/// Expr`) because it is also what the matcher's `var_less_than`
/// predicate and the addition/multiplication canonical-orientation
/// rules call directly.
pub fn compare(a: &Expr, b: &Expr) -> StdOrdering {
    let (ra, rb) = (category_rank(a), category_rank(b));
    if ra != rb {
        return ra.cmp(&rb);
    }
    match (a, b) {
        (Expr::Symbol(x), Expr::Symbol(y)) => x.cmp(y),
        (Expr::Constant(_) | Expr::Fraction(_), Expr::Constant(_) | Expr::Fraction(_)) => {
            cmp_numeric(a, b)
        }
        (Expr::Node(op_a, args_a), Expr::Node(op_b, args_b)) => {
            op_a.order_rank()
                .cmp(&op_b.order_rank())
                .then_with(|| args_a.len().cmp(&args_b.len()))
                .then_with(|| {
                    for (x, y) in args_a.iter().zip(args_b.iter()) {
                        let c = compare(x, y);
                        if c != StdOrdering::Equal {
                            return c;
                        }
                    }
                    StdOrdering::Equal
                })
        }
        _ => unreachable!("category_rank guarantees matching variants here"),
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<StdOrdering> {
        Some(compare(self, other))
    }
}

impl Ord for Expr {
    fn cmp(&self, other: &Self) -> StdOrdering {
        compare(self, other)
    }
}

impl Eq for Expr {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{IntoExprLiteral, FracLiteral};
    use crate::symbol::Symbol;

    #[test]
    fn expressions_sort_before_symbols_before_constants() {
        let x = Symbol::new("x");
        let expr = Expr::from(x) + 1i64.c();
        let sym = Expr::from(Symbol::new("y"));
        let con = 5i64.c();
        assert!(expr < sym);
        assert!(sym < con);
    }

    #[test]
    fn symbols_order_by_declaration() {
        let x = Symbol::new("x1");
        let y = Symbol::new("y1");
        assert!(Expr::from(x) < Expr::from(y));
    }

    #[test]
    fn constants_order_by_value() {
        assert!(1i64.c() < 2i64.c());
        assert!(1i64.frac(2) < 2i64.c());
        assert!(1i64.frac(3) < 1i64.frac(2));
    }

    #[test]
    fn total_order_is_strict_and_transitive_on_a_sample() {
        let x = Symbol::new("x2");
        let y = Symbol::new("y2");
        let sample = vec![
            Expr::from(x),
            Expr::from(y),
            1i64.c(),
            2i64.c(),
            1i64.frac(2),
            Expr::from(x) + Expr::from(y),
            Expr::from(x) * Expr::from(y),
        ];
        for a in &sample {
            assert_eq!(compare(a, a), StdOrdering::Equal, "irreflexive violated");
        }
        for a in &sample {
            for b in &sample {
                let ab = compare(a, b);
                let ba = compare(b, a);
                assert_eq!(ab, ba.reverse(), "antisymmetry violated for {a:?}, {b:?}");
            }
        }
        for a in &sample {
            for b in &sample {
                for c in &sample {
                    if compare(a, b) == StdOrdering::Less && compare(b, c) == StdOrdering::Less {
                        assert_eq!(compare(a, c), StdOrdering::Less, "transitivity violated");
                    }
                }
            }
        }
    }
}

//! Pythagorean identity (`spec.md` §4.7 "Pythagorean identities").

use symrw_expr::{Constant, Expr, Op};

use crate::context::Context;
use crate::rule::RewriteSystem;
use crate::strategy::Strategy;

/// `sin²(x) + cos²(x) → 1`, and the commutative `cos²(x) + sin²(x)`
/// variant. The reverse expansion (`1 → sin²(x)+cos²(x)`) is disabled —
/// there is no finite way to pick which `x` to expand into.
fn pythagorean(expr: &Expr, _ctx: &Context) -> Expr {
    fn squared_trig_arg(e: &Expr, op: Op) -> Option<Expr> {
        match e {
            Expr::Node(Op::Pow, pow_args) if pow_args.len() == 2 => {
                if let Expr::Constant(Constant::Int(2)) = pow_args[1].as_ref() {
                    match pow_args[0].as_ref() {
                        Expr::Node(inner_op, inner_args) if *inner_op == op && inner_args.len() == 1 => {
                            Some((*inner_args[0]).clone())
                        }
                        _ => None,
                    }
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    match expr {
        Expr::Node(Op::Add, args) if args.len() == 2 => {
            let sin_then_cos = squared_trig_arg(&args[0], Op::Sin)
                .zip(squared_trig_arg(&args[1], Op::Cos))
                .filter(|(a, b)| a == b);
            let cos_then_sin = squared_trig_arg(&args[0], Op::Cos)
                .zip(squared_trig_arg(&args[1], Op::Sin))
                .filter(|(a, b)| a == b);
            if sin_then_cos.is_some() || cos_then_sin.is_some() {
                Expr::Constant(Constant::Int(1))
            } else {
                expr.clone()
            }
        }
        _ => expr.clone(),
    }
}

pub fn pythagorean_rules() -> RewriteSystem {
    RewriteSystem::new(vec![Box::new(pythagorean as fn(&Expr, &Context) -> Expr)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{IntoExprLiteral, Symbol};

    #[test]
    fn sin_squared_plus_cos_squared_is_one() {
        let x = Symbol::new("x_pyth");
        let e = symrw_expr::sin(Expr::from(x)).pow(2i64.c()) + symrw_expr::cos(Expr::from(x)).pow(2i64.c());
        assert_eq!(
            pythagorean_rules().apply(&e, &Context::new()),
            Expr::Constant(Constant::Int(1))
        );
    }

    #[test]
    fn commutative_variant_also_folds() {
        let x = Symbol::new("x_pyth2");
        let e = symrw_expr::cos(Expr::from(x)).pow(2i64.c()) + symrw_expr::sin(Expr::from(x)).pow(2i64.c());
        assert_eq!(
            pythagorean_rules().apply(&e, &Context::new()),
            Expr::Constant(Constant::Int(1))
        );
    }

    #[test]
    fn different_arguments_do_not_fold() {
        let x = Symbol::new("x_pyth3");
        let y = Symbol::new("y_pyth3");
        let e = symrw_expr::sin(Expr::from(x)).pow(2i64.c()) + symrw_expr::cos(Expr::from(y)).pow(2i64.c());
        assert_eq!(pythagorean_rules().apply(&e, &Context::new()), e);
    }
}

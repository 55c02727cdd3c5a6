//! Multiplication rules (`spec.md` §4.7 "Multiplication rules"). Power
//! combining lives in [`crate::rules::power`]; distribution over
//! addition is intentionally not a rule here — `spec.md` disables it by
//! default because it fights factoring.

use symrw_expr::{Constant, Expr, Op};
use symrw_match::Pattern;

use crate::context::Context;
use crate::rule::{Rewrite, RewriteSystem};
use crate::strategy::Strategy;

pub fn zero_one_identities() -> RewriteSystem {
    let (x_l, _) = Pattern::var("x_mul_l");
    let zero_times_x = Rewrite::new(
        Pattern::node(Op::Mul, vec![Pattern::Constant(Constant::Int(0)), x_l]),
        Pattern::Constant(Constant::Int(0)),
    );
    let (x_r, _) = Pattern::var("x_mul_r");
    let x_times_zero = Rewrite::new(
        Pattern::node(Op::Mul, vec![x_r, Pattern::Constant(Constant::Int(0))]),
        Pattern::Constant(Constant::Int(0)),
    );
    let (x_one_l, _) = Pattern::var("x_one_l");
    let one_times_x = Rewrite::new(
        Pattern::node(Op::Mul, vec![Pattern::Constant(Constant::Int(1)), x_one_l.clone()]),
        x_one_l,
    );
    let (x_one_r, _) = Pattern::var("x_one_r");
    let x_times_one = Rewrite::new(
        Pattern::node(Op::Mul, vec![x_one_r.clone(), Pattern::Constant(Constant::Int(1))]),
        x_one_r,
    );
    RewriteSystem::new(vec![
        Box::new(zero_times_x),
        Box::new(x_times_zero),
        Box::new(one_times_x),
        Box::new(x_times_one),
    ])
}

/// `x·y → y·x` iff `y < x`.
fn canonical_ordering(expr: &Expr, _ctx: &Context) -> Expr {
    match expr {
        Expr::Node(Op::Mul, args) if args.len() == 2 => {
            if args[1] < args[0] {
                (*args[1]).clone() * (*args[0]).clone()
            } else {
                expr.clone()
            }
        }
        _ => expr.clone(),
    }
}

/// `(a·b)·c → a·(b·c)`, mirroring the addition table's conditional
/// reassociation: only applied when it immediately unlocks another rule
/// in this table.
fn reassociate(expr: &Expr, ctx: &Context) -> Expr {
    match expr {
        Expr::Node(Op::Mul, outer_args) if outer_args.len() == 2 => {
            if let Expr::Node(Op::Mul, inner_args) = outer_args[0].as_ref() {
                if inner_args.len() == 2 {
                    let a = inner_args[0].clone();
                    let b = inner_args[1].clone();
                    let c = outer_args[1].clone();
                    let right_assoc = (*a).clone() * ((*b).clone() * (*c).clone());
                    let without = base_rules().apply(expr, ctx);
                    let with = base_rules().apply(&right_assoc, ctx);
                    if with != right_assoc && without == *expr {
                        return right_assoc;
                    }
                }
            }
            expr.clone()
        }
        _ => expr.clone(),
    }
}

fn base_rules() -> RewriteSystem {
    RewriteSystem::new(vec![
        Box::new(zero_one_identities()),
        Box::new(canonical_ordering as fn(&Expr, &Context) -> Expr),
        Box::new(super::power::power_rules()),
    ])
}

/// The full multiplication `RewriteSystem` (`spec.md` §4.7), including
/// the power-combining rules it shares a pattern shape with.
pub fn multiplication_rules() -> RewriteSystem {
    RewriteSystem::new(vec![
        Box::new(zero_one_identities()),
        Box::new(canonical_ordering as fn(&Expr, &Context) -> Expr),
        Box::new(super::power::power_rules()),
        Box::new(reassociate as fn(&Expr, &Context) -> Expr),
    ])
}

/// `a·(b+c) → a·b + a·c`. Not part of [`multiplication_rules`] — `spec.md`
/// disables distribution by default because it fights factoring; callers
/// that want it invoke this strategy explicitly.
pub fn distribute() -> impl Strategy {
    |expr: &Expr, _ctx: &Context| match expr {
        Expr::Node(Op::Mul, args) if args.len() == 2 => match args[1].as_ref() {
            Expr::Node(Op::Add, inner) if inner.len() == 2 => {
                let a = &args[0];
                (**a).clone() * (*inner[0]).clone() + (**a).clone() * (*inner[1]).clone()
            }
            _ => expr.clone(),
        },
        _ => expr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{IntoExprLiteral, Symbol};

    #[test]
    fn zero_times_x_is_zero() {
        let x = Symbol::new("x_mz");
        let e = 0i64.c() * Expr::from(x);
        assert_eq!(multiplication_rules().apply(&e, &Context::new()), 0i64.c());
    }

    #[test]
    fn one_times_x_is_x() {
        let x = Symbol::new("x_mo");
        let e = 1i64.c() * Expr::from(x);
        assert_eq!(multiplication_rules().apply(&e, &Context::new()), Expr::from(x));
    }

    #[test]
    fn canonical_ordering_orients_by_total_order() {
        let x = Symbol::new("x_mo1");
        let y = Symbol::new("y_mo2");
        let (lo, hi) = if Expr::from(x) < Expr::from(y) {
            (Expr::from(x), Expr::from(y))
        } else {
            (Expr::from(y), Expr::from(x))
        };
        let e = hi.clone() * lo.clone();
        assert_eq!(multiplication_rules().apply(&e, &Context::new()), lo * hi);
    }
}

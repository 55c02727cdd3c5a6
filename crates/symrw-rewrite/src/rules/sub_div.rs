//! Subtraction/division normalization (`spec.md` §4.7 "Subtraction and
//! division"): rewritten to addition-of-negation and
//! multiplication-by-reciprocal so the rest of the rule table only ever
//! has to reason about `Add`/`Mul`/`Pow`.

use symrw_expr::{Constant, Expr, Op};

use crate::context::Context;
use crate::rule::RewriteSystem;
use crate::strategy::Strategy;

/// `a − b → a + (−1)·b`.
fn sub_to_add_neg(expr: &Expr, _ctx: &Context) -> Expr {
    match expr {
        Expr::Node(Op::Sub, args) if args.len() == 2 => {
            (*args[0]).clone() + (Expr::Constant(Constant::Int(-1)) * (*args[1]).clone())
        }
        _ => expr.clone(),
    }
}

/// `a / b → a · b^(−1)`.
fn div_to_mul_recip(expr: &Expr, _ctx: &Context) -> Expr {
    match expr {
        Expr::Node(Op::Div, args) if args.len() == 2 => {
            (*args[0]).clone() * (*args[1]).clone().pow(Expr::Constant(Constant::Int(-1)))
        }
        _ => expr.clone(),
    }
}

pub fn sub_div_rules() -> RewriteSystem {
    RewriteSystem::new(vec![
        Box::new(sub_to_add_neg as fn(&Expr, &Context) -> Expr),
        Box::new(div_to_mul_recip as fn(&Expr, &Context) -> Expr),
    ])
}

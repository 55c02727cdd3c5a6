//! Symbolic differentiation (`spec.md` §4.7 "`diff(expr, var)`").
//!
//! Implemented as a total function with one case per operator, matching
//! the table in `spec.md` exactly: sum/difference/negation distribute,
//! product and quotient rule apply the chain rule to both operands,
//! power rule treats the exponent as constant w.r.t. `var` (`spec.md`
//! explicitly doesn't special-case a variable exponent), and every
//! transcendental/trig/hyperbolic operator gets its standard derivative
//! with the inner argument's own derivative multiplied in.

use symrw_expr::{Expr, IntoExprLiteral, Op, Symbol};

use crate::context::Context;
use crate::pipeline::simplify;

/// `d/dx(expr)`.
///
/// `d/dx(c) = 0`, `d/dx(x) = 1`, `d/dx(y) = 0` for `y ≠ x`; every
/// compound node recurses into its own operator's rule below.
pub fn diff(expr: &Expr, var: Symbol) -> Expr {
    match expr {
        Expr::Constant(_) | Expr::Fraction(_) => 0i64.c(),
        Expr::Symbol(s) => {
            if *s == var {
                1i64.c()
            } else {
                0i64.c()
            }
        }
        Expr::Node(op, args) => diff_node(*op, args, var),
    }
}

fn diff_node(op: Op, args: &[std::rc::Rc<Expr>], var: Symbol) -> Expr {
    let d = |i: usize| diff(&args[i], var);
    match op {
        Op::Add => args.iter().fold(0i64.c(), |acc, a| acc + diff(a, var)),
        Op::Sub => d(0) - d(1),
        Op::Neg => -d(0),
        Op::Mul => {
            // Pairwise product rule, left-folded over however many
            // operands this `Mul` has flattened to.
            let mut iter = args.iter();
            let first = iter.next().expect("Mul built with no operands");
            let mut acc_value = (**first).clone();
            let mut acc_deriv = diff(first, var);
            for next in iter {
                let next_deriv = diff(next, var);
                acc_deriv = acc_deriv.clone() * next.as_ref().clone() + acc_value.clone() * next_deriv;
                acc_value = acc_value * next.as_ref().clone();
            }
            acc_deriv
        }
        Op::Div => {
            let f = &args[0];
            let g = &args[1];
            let df = d(0);
            let dg = d(1);
            (df * (**g).clone() - (**f).clone() * dg) / (**g).clone().pow(2i64.c())
        }
        Op::Pow => {
            let base = &args[0];
            let exp = &args[1];
            if is_constant_wrt(exp, var) {
                // `n·f^(n−1)·df`, `n` held constant w.r.t. `var`.
                exp.as_ref().clone()
                    * (**base).clone().pow(exp.as_ref().clone() - 1i64.c())
                    * diff(base, var)
            } else {
                // General case `f^g`: `f^g·(g'·ln(f) + g·f'/f)`.
                let f = (**base).clone();
                let g = (**exp).clone();
                let df = diff(base, var);
                let dg = diff(exp, var);
                Expr::node(Op::Pow, vec![f.clone(), g.clone()])
                    * (dg * symrw_expr::log(f.clone()) + g * df / f)
            }
        }
        Op::Sqrt => d(0) / (2i64.c() * Expr::node(Op::Sqrt, vec![args[0].as_ref().clone()])),
        Op::Exp => d(0) * Expr::node(Op::Exp, vec![args[0].as_ref().clone()]),
        Op::Log => d(0) / args[0].as_ref().clone(),
        Op::Sin => d(0) * Expr::node(Op::Cos, vec![args[0].as_ref().clone()]),
        Op::Cos => -(d(0) * Expr::node(Op::Sin, vec![args[0].as_ref().clone()])),
        Op::Tan => d(0) / (Expr::node(Op::Cos, vec![args[0].as_ref().clone()]).pow(2i64.c())),
        Op::Asin => d(0) / symrw_expr::sqrt(1i64.c() - args[0].as_ref().clone().pow(2i64.c())),
        Op::Acos => -(d(0) / symrw_expr::sqrt(1i64.c() - args[0].as_ref().clone().pow(2i64.c()))),
        Op::Atan => d(0) / (1i64.c() + args[0].as_ref().clone().pow(2i64.c())),
        Op::Sinh => d(0) * Expr::node(Op::Cosh, vec![args[0].as_ref().clone()]),
        Op::Cosh => d(0) * Expr::node(Op::Sinh, vec![args[0].as_ref().clone()]),
        Op::Tanh => d(0) * (1i64.c() - Expr::node(Op::Tanh, vec![args[0].as_ref().clone()]).pow(2i64.c())),
        other => panic!("diff: operator {other:?} has no differentiation rule"),
    }
}

/// Whether `expr` is free of `var` — used by the power rule to decide
/// whether the exponent is "constant" for `d/dx(f^n)` purposes.
fn is_constant_wrt(expr: &Expr, var: Symbol) -> bool {
    match expr {
        Expr::Constant(_) | Expr::Fraction(_) => true,
        Expr::Symbol(s) => *s != var,
        Expr::Node(_, args) => args.iter().all(|a| is_constant_wrt(a, var)),
    }
}

/// `diff_simplified(expr, var, ctx) = simplify(diff(expr, var), ctx)`.
pub fn diff_simplified(expr: &Expr, var: Symbol, ctx: &Context) -> Expr {
    simplify(&diff(expr, var), ctx)
}

/// `diff(diff(…diff(expr, var)…), var)`, `n` times.
pub fn nth_derivative(expr: &Expr, var: Symbol, n: u32) -> Expr {
    let mut current = expr.clone();
    for _ in 0..n {
        current = diff(&current, var);
    }
    current
}

/// The tuple of partial derivatives of `expr` with respect to each of
/// `vars`, in order.
pub fn gradient(expr: &Expr, vars: &[Symbol]) -> Vec<Expr> {
    vars.iter().map(|&v| diff(expr, v)).collect()
}

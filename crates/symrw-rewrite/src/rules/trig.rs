//! Trig rules (`spec.md` §4.7 "Trig rules").

use symrw_expr::{Constant, Expr, Fraction, Op};
use symrw_match::Pattern;

use crate::context::Context;
use crate::rule::{Rewrite, RewriteSystem};
use crate::strategy::Strategy;

fn as_rational(e: &Expr) -> Option<Fraction> {
    match e {
        Expr::Constant(Constant::Int(n)) => Some(Fraction { num: *n, den: 1 }),
        Expr::Fraction(f) => Some(*f),
        Expr::Node(Op::Pow, args) if args.len() == 2 => {
            if let Expr::Constant(Constant::Int(-1)) = args[1].as_ref() {
                let base = as_rational(&args[0])?;
                Fraction { num: 1, den: 1 }.div(base)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// The rational multiple of `π` that `e` structurally represents, if
/// any (`1` for bare `π`, `c` for `c·π`, recursing through nested
/// rational multiplications so `c·(π·d⁻¹)`-shaped terms from division
/// normalization are recognized too).
fn pi_coefficient(e: &Expr) -> Option<Fraction> {
    match e {
        Expr::Node(Op::Pi, args) if args.is_empty() => Some(Fraction { num: 1, den: 1 }),
        Expr::Constant(Constant::Int(0)) => Some(Fraction { num: 0, den: 1 }),
        Expr::Node(Op::Mul, args) if args.len() == 2 => {
            if let Some(r) = as_rational(&args[0]) {
                pi_coefficient(&args[1]).map(|c| r.mul(c))
            } else if let Some(r) = as_rational(&args[1]) {
                pi_coefficient(&args[0]).map(|c| r.mul(c))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Number of quarter-turns (`π/2` steps) `e` represents, if it's
/// structurally a rational multiple of `π`.
fn quarter_turns(e: &Expr) -> Option<i64> {
    let coeff = pi_coefficient(e)?;
    let quarters = coeff.mul(Fraction { num: 2, den: 1 });
    if quarters.den == 1 {
        Some(quarters.num)
    } else {
        None
    }
}

/// Exact evaluation of `sin`/`cos`/`tan` at multiples of `π/2`.
fn exact_angle_eval(expr: &Expr, _ctx: &Context) -> Expr {
    match expr {
        Expr::Node(op @ (Op::Sin | Op::Cos | Op::Tan), args) if args.len() == 1 => {
            let Some(k) = quarter_turns(&args[0]) else {
                return expr.clone();
            };
            let phase = k.rem_euclid(4);
            let value = match (op, phase) {
                (Op::Sin, 0) | (Op::Sin, 2) => 0,
                (Op::Sin, 1) => 1,
                (Op::Sin, 3) => -1,
                (Op::Cos, 1) | (Op::Cos, 3) => 0,
                (Op::Cos, 0) => 1,
                (Op::Cos, 2) => -1,
                (Op::Tan, 0) | (Op::Tan, 2) => 0,
                _ => return expr.clone(), // tan at an odd quarter-turn is undefined
            };
            Expr::Constant(Constant::Int(value))
        }
        _ => expr.clone(),
    }
}

fn parity_rules() -> RewriteSystem {
    let (x_sin, _) = Pattern::var("x_trig_sin");
    let sin_neg = Rewrite::new(
        Pattern::node(Op::Sin, vec![Pattern::node(Op::Neg, vec![x_sin.clone()])]),
        Pattern::node(Op::Neg, vec![Pattern::node(Op::Sin, vec![x_sin])]),
    );
    let (x_cos, _) = Pattern::var("x_trig_cos");
    let cos_neg = Rewrite::new(
        Pattern::node(Op::Cos, vec![Pattern::node(Op::Neg, vec![x_cos.clone()])]),
        Pattern::node(Op::Cos, vec![x_cos]),
    );
    let (x_tan, _) = Pattern::var("x_trig_tan");
    let tan_neg = Rewrite::new(
        Pattern::node(Op::Tan, vec![Pattern::node(Op::Neg, vec![x_tan.clone()])]),
        Pattern::node(Op::Neg, vec![Pattern::node(Op::Tan, vec![x_tan])]),
    );
    RewriteSystem::new(vec![Box::new(sin_neg), Box::new(cos_neg), Box::new(tan_neg)])
}

/// The default trig `RewriteSystem`: exact-angle evaluation and parity.
/// Double-angle identities are a separate, opt-in table (see
/// [`double_angle_rules`]) enabled only by the `trig_aware_simplify`
/// pipeline.
pub fn trig_rules() -> RewriteSystem {
    RewriteSystem::new(vec![
        Box::new(exact_angle_eval as fn(&Expr, &Context) -> Expr),
        Box::new(parity_rules()),
    ])
}

/// `sin(2x) → 2·sin(x)·cos(x)`, `cos(2x) → cos²(x) − sin²(x)`. Disabled
/// by default (`spec.md` §4.7): only `trig_aware_simplify` wires this in.
pub fn double_angle_rules() -> RewriteSystem {
    let (x_sin2, _) = Pattern::var("x_trig_sin2");
    let sin_double = Rewrite::new(
        Pattern::node(
            Op::Sin,
            vec![Pattern::node(
                Op::Mul,
                vec![Pattern::Constant(Constant::Int(2)), x_sin2.clone()],
            )],
        ),
        Pattern::node(
            Op::Mul,
            vec![
                Pattern::Constant(Constant::Int(2)),
                Pattern::node(
                    Op::Mul,
                    vec![
                        Pattern::node(Op::Sin, vec![x_sin2.clone()]),
                        Pattern::node(Op::Cos, vec![x_sin2]),
                    ],
                ),
            ],
        ),
    );

    let (x_cos2, _) = Pattern::var("x_trig_cos2");
    let cos_double = Rewrite::new(
        Pattern::node(
            Op::Cos,
            vec![Pattern::node(
                Op::Mul,
                vec![Pattern::Constant(Constant::Int(2)), x_cos2.clone()],
            )],
        ),
        Pattern::node(
            Op::Sub,
            vec![
                Pattern::node(Op::Pow, vec![Pattern::node(Op::Cos, vec![x_cos2.clone()]), Pattern::Constant(Constant::Int(2))]),
                Pattern::node(Op::Pow, vec![Pattern::node(Op::Sin, vec![x_cos2]), Pattern::Constant(Constant::Int(2))]),
            ],
        ),
    );

    RewriteSystem::new(vec![Box::new(sin_double), Box::new(cos_double)])
}

/// `tan(x) → sin(x)/cos(x)`, applied on demand (`spec.md` §4.7) rather
/// than folded into [`trig_rules`].
pub fn tan_to_sin_cos() -> impl Strategy {
    |expr: &Expr, _ctx: &Context| match expr {
        Expr::Node(Op::Tan, args) if args.len() == 1 => {
            symrw_expr::sin((*args[0]).clone()) / symrw_expr::cos((*args[0]).clone())
        }
        _ => expr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{IntoExprLiteral, Symbol};

    #[test]
    fn sin_of_zero_is_zero() {
        let e = symrw_expr::sin(0i64.c());
        assert_eq!(trig_rules().apply(&e, &Context::new()), 0i64.c());
    }

    #[test]
    fn cos_of_pi_is_minus_one() {
        let e = symrw_expr::cos(Expr::pi());
        assert_eq!(trig_rules().apply(&e, &Context::new()), Expr::Constant(Constant::Int(-1)));
    }

    #[test]
    fn sin_is_odd() {
        let x = Symbol::new("x_trigodd");
        let e = symrw_expr::sin(-Expr::from(x));
        let result = trig_rules().apply(&e, &Context::new());
        assert_eq!(result, -symrw_expr::sin(Expr::from(x)));
    }

    #[test]
    fn cos_is_even() {
        let x = Symbol::new("x_trigeven");
        let e = symrw_expr::cos(-Expr::from(x));
        let result = trig_rules().apply(&e, &Context::new());
        assert_eq!(result, symrw_expr::cos(Expr::from(x)));
    }
}

//! Hyperbolic rules (`spec.md` §4.7 "Hyperbolic rules").

use symrw_expr::{Constant, Op};
use symrw_match::Pattern;

use crate::rule::{Rewrite, RewriteSystem};

/// Parity (`sinh(−x) → −sinh(x)`, `cosh(−x) → cosh(x)`, `tanh(−x) →
/// −tanh(x)`) plus the zero-argument identities. `cosh² − sinh² → 1` is
/// intentionally absent — expanding it would oscillate against the
/// `cosh(0) → 1` fold.
pub fn hyperbolic_rules() -> RewriteSystem {
    let (x_sinh, _) = Pattern::var("x_hyp_sinh");
    let sinh_neg = Rewrite::new(
        Pattern::node(Op::Sinh, vec![Pattern::node(Op::Neg, vec![x_sinh.clone()])]),
        Pattern::node(Op::Neg, vec![Pattern::node(Op::Sinh, vec![x_sinh])]),
    );
    let (x_cosh, _) = Pattern::var("x_hyp_cosh");
    let cosh_neg = Rewrite::new(
        Pattern::node(Op::Cosh, vec![Pattern::node(Op::Neg, vec![x_cosh.clone()])]),
        Pattern::node(Op::Cosh, vec![x_cosh]),
    );
    let (x_tanh, _) = Pattern::var("x_hyp_tanh");
    let tanh_neg = Rewrite::new(
        Pattern::node(Op::Tanh, vec![Pattern::node(Op::Neg, vec![x_tanh.clone()])]),
        Pattern::node(Op::Neg, vec![Pattern::node(Op::Tanh, vec![x_tanh])]),
    );

    let sinh_zero = Rewrite::new(
        Pattern::node(Op::Sinh, vec![Pattern::Constant(Constant::Int(0))]),
        Pattern::Constant(Constant::Int(0)),
    );
    let cosh_zero = Rewrite::new(
        Pattern::node(Op::Cosh, vec![Pattern::Constant(Constant::Int(0))]),
        Pattern::Constant(Constant::Int(1)),
    );
    let tanh_zero = Rewrite::new(
        Pattern::node(Op::Tanh, vec![Pattern::Constant(Constant::Int(0))]),
        Pattern::Constant(Constant::Int(0)),
    );

    RewriteSystem::new(vec![
        Box::new(sinh_neg),
        Box::new(cosh_neg),
        Box::new(tanh_neg),
        Box::new(sinh_zero),
        Box::new(cosh_zero),
        Box::new(tanh_zero),
    ])
}

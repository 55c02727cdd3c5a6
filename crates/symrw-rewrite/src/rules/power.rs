//! Power rules (`spec.md` §4.7 "Power rules").

use symrw_expr::{Constant, Op};
use symrw_match::Pattern;

use crate::rule::{Rewrite, RewriteSystem};

/// `x^0 → 1`, `x^1 → x`, `1^x → 1`, `0^x → 0` (x ≠ 0), `(x^a)^b →
/// x^(a·b)`, and the three power-combining multiplication rules
/// (`x·x^a → x^(a+1)`, `x^a·x → x^(a+1)`, `x^a·x^b → x^(a+b)`).
///
/// Power combining is included here (rather than in `multiplication`)
/// because it shares the same `x^a` pattern shape as the rest of this
/// table; `multiplication` only handles the `0`/`1`-identity and
/// canonical-ordering rules for `*` itself.
pub fn power_rules() -> RewriteSystem {
    let (x_pow0, x0) = Pattern::var("x_pow0");
    let rule_pow_zero = Rewrite::new(
        Pattern::node(Op::Pow, vec![x_pow0, Pattern::Constant(Constant::Int(0))]),
        Pattern::Constant(Constant::Int(1)),
    );
    let _ = x0;

    let (x_pow1, _) = Pattern::var("x_pow1");
    let rule_pow_one = Rewrite::new(
        Pattern::node(Op::Pow, vec![x_pow1.clone(), Pattern::Constant(Constant::Int(1))]),
        x_pow1,
    );

    let (x_one_pow, _) = Pattern::var("x_one_pow");
    let rule_one_pow = Rewrite::new(
        Pattern::node(Op::Pow, vec![Pattern::Constant(Constant::Int(1)), x_one_pow]),
        Pattern::Constant(Constant::Int(1)),
    );

    let (x_zero_pow, v_zero_pow) = Pattern::var("x_zero_pow");
    let rule_zero_pow = Rewrite::with_predicate(
        Pattern::node(Op::Pow, vec![Pattern::Constant(Constant::Int(0)), x_zero_pow]),
        Pattern::Constant(Constant::Int(0)),
        non_zero_constant(v_zero_pow.id()),
    );

    let (x_nest, _) = Pattern::var("x_nest");
    let (a_nest, _) = Pattern::var("a_nest");
    let (b_nest, _) = Pattern::var("b_nest");
    let rule_nested_pow = Rewrite::new(
        Pattern::node(
            Op::Pow,
            vec![
                Pattern::node(Op::Pow, vec![x_nest.clone(), a_nest.clone()]),
                b_nest.clone(),
            ],
        ),
        Pattern::node(Op::Pow, vec![x_nest, Pattern::node(Op::Mul, vec![a_nest, b_nest])]),
    );

    let (x_comb_l, _) = Pattern::var("x_comb_l");
    let (a_comb_l, _) = Pattern::var("a_comb_l");
    let rule_x_times_pow = Rewrite::new(
        Pattern::node(
            Op::Mul,
            vec![x_comb_l.clone(), Pattern::node(Op::Pow, vec![x_comb_l.clone(), a_comb_l.clone()])],
        ),
        Pattern::node(Op::Pow, vec![x_comb_l, Pattern::node(Op::Add, vec![a_comb_l, Pattern::Constant(Constant::Int(1))])]),
    );

    let (x_comb_r, _) = Pattern::var("x_comb_r");
    let (a_comb_r, _) = Pattern::var("a_comb_r");
    let rule_pow_times_x = Rewrite::new(
        Pattern::node(
            Op::Mul,
            vec![Pattern::node(Op::Pow, vec![x_comb_r.clone(), a_comb_r.clone()]), x_comb_r.clone()],
        ),
        Pattern::node(Op::Pow, vec![x_comb_r, Pattern::node(Op::Add, vec![a_comb_r, Pattern::Constant(Constant::Int(1))])]),
    );

    let (x_comb_both, _) = Pattern::var("x_comb_both");
    let (a_comb_both, _) = Pattern::var("a_comb_both");
    let (b_comb_both, _) = Pattern::var("b_comb_both");
    let rule_pow_times_pow = Rewrite::new(
        Pattern::node(
            Op::Mul,
            vec![
                Pattern::node(Op::Pow, vec![x_comb_both.clone(), a_comb_both.clone()]),
                Pattern::node(Op::Pow, vec![x_comb_both.clone(), b_comb_both.clone()]),
            ],
        ),
        Pattern::node(Op::Pow, vec![x_comb_both, Pattern::node(Op::Add, vec![a_comb_both, b_comb_both])]),
    );

    RewriteSystem::new(vec![
        Box::new(rule_pow_zero),
        Box::new(rule_pow_one),
        Box::new(rule_one_pow),
        Box::new(rule_zero_pow),
        Box::new(rule_nested_pow),
        Box::new(rule_x_times_pow),
        Box::new(rule_pow_times_x),
        Box::new(rule_pow_times_pow),
    ])
}

/// True when the expression bound to `id` is not the constant zero —
/// covers both "it's a nonzero constant/fraction" and "it isn't a
/// constant at all" (a symbolic exponent never triggers the `0^x → 0`
/// veto, per `spec.md`'s "for x ≠ 0" qualifier).
fn non_zero_constant(id: symrw_match::VarId) -> impl symrw_match::Predicate {
    move |b: &symrw_match::Bindings| match b.get(id) {
        Some(symrw_expr::Expr::Constant(c)) => !c.is_zero(),
        Some(symrw_expr::Expr::Fraction(f)) => !f.is_zero(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{IntoExprLiteral, Symbol};
    use crate::context::Context;
    use crate::strategy::Strategy;

    #[test]
    fn x_pow_zero_is_one() {
        let x = Symbol::new("x_p0");
        let e = symrw_expr::Expr::from(x).pow(0i64.c());
        assert_eq!(power_rules().apply(&e, &Context::new()), 1i64.c());
    }

    #[test]
    fn x_pow_one_is_x() {
        let x = Symbol::new("x_p1");
        let e = symrw_expr::Expr::from(x).pow(1i64.c());
        assert_eq!(power_rules().apply(&e, &Context::new()), symrw_expr::Expr::from(x));
    }

    #[test]
    fn zero_pow_nonzero_is_zero() {
        let x = Symbol::new("x_zp");
        let e = 0i64.c().pow(symrw_expr::Expr::from(x));
        let result = power_rules().apply(&e, &Context::new());
        assert_eq!(result, 0i64.c());
    }

    #[test]
    fn nested_power_combines() {
        let x = Symbol::new("x_nestp");
        let e = symrw_expr::Expr::from(x).pow(2i64.c()).pow(3i64.c());
        let result = power_rules().apply(&e, &Context::new());
        assert_eq!(result, symrw_expr::Expr::from(x).pow(2i64.c() * 3i64.c()));
    }

    #[test]
    fn power_times_power_combines_exponents() {
        let x = Symbol::new("x_combp");
        let e = symrw_expr::Expr::from(x).pow(2i64.c()) * symrw_expr::Expr::from(x).pow(3i64.c());
        let result = power_rules().apply(&e, &Context::new());
        assert_eq!(result, symrw_expr::Expr::from(x).pow(2i64.c() + 3i64.c()));
    }
}

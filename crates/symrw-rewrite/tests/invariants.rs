//! Property-level checks that must hold for every expression, not just
//! the literal scenarios in `scenarios.rs`: idempotence, value
//! preservation, canonical orientation, match/substitute round trips,
//! repeated-variable consistency, and derivative linearity.

use symrw_expr::{cos, sin, Env, Expr, IntoExprLiteral, Op, Symbol};
use symrw_match::{extract, substitute, Pattern};
use symrw_rewrite::{diff_simplified, full_simplify, simplify, trig_aware_simplify, two_stage_simplify, Context, Rewrite};

fn sample_expressions() -> Vec<(Expr, Symbol)> {
    let x = Symbol::new("x_inv");
    let y = Symbol::new("y_inv");
    vec![
        (Expr::from(x) + 0i64.c(), x),
        ((Expr::from(x) * 2i64.c()) + (Expr::from(x) * 3i64.c()), x),
        (sin(Expr::from(x)).pow(2i64.c()) + cos(Expr::from(x)).pow(2i64.c()), x),
        (Expr::from(y) + Expr::from(x), x),
        (Expr::from(x).pow(2i64.c()).pow(3i64.c()), x),
    ]
}

#[test]
fn simplify_is_idempotent() {
    for (e, _) in sample_expressions() {
        let ctx = Context::new();
        let once = simplify(&e, &ctx);
        let twice = simplify(&once, &ctx);
        assert_eq!(once, twice, "simplify(simplify(e)) != simplify(e) for {e:?}");
    }
}

#[test]
fn full_simplify_is_idempotent() {
    for (e, _) in sample_expressions() {
        let ctx = Context::new();
        let once = full_simplify(&e, &ctx);
        assert_eq!(once, full_simplify(&once, &ctx));
    }
}

#[test]
fn trig_aware_simplify_is_idempotent() {
    let x = Symbol::new("x_inv_trig");
    let e = sin(Expr::from(x)).pow(2i64.c()) + cos(Expr::from(x)).pow(2i64.c());
    let ctx = Context::new();
    let once = trig_aware_simplify(&e, &ctx);
    assert_eq!(once, trig_aware_simplify(&once, &ctx));
}

#[test]
fn two_stage_simplify_is_idempotent() {
    let x = Symbol::new("x_inv_two_stage");
    let dead = Expr::from(x) + Expr::from(x) + Expr::from(x);
    let e = 0i64.c() * dead;
    let ctx = Context::new();
    let once = two_stage_simplify(&e, &ctx);
    assert_eq!(once, two_stage_simplify(&once, &ctx));
}

#[test]
fn simplify_preserves_numeric_value() {
    for (e, sym) in sample_expressions() {
        let ctx = Context::new();
        let simplified = simplify(&e, &ctx);
        let env = free_symbols(&e).into_iter().fold(Env::new(), |acc, s| {
            if acc.get(&s).is_some() {
                acc
            } else if s == sym {
                acc.bind(s, 1.7)
            } else {
                acc.bind(s, 1.3)
            }
        });
        let before = symrw_expr::evaluate(&e, &env);
        let after = symrw_expr::evaluate(&simplified, &env);
        match (before, after) {
            (Ok(b), Ok(a)) => assert!((b - a).abs() < 1e-9, "{e:?} evaluated to {b} before simplify, {a} after"),
            (Err(_), Err(_)) => {}
            (b, a) => panic!("value preservation mismatch for {e:?}: before={b:?} after={a:?}"),
        }
    }
}

fn free_symbols(e: &Expr) -> Vec<Symbol> {
    match e {
        Expr::Symbol(s) => vec![*s],
        Expr::Constant(_) | Expr::Fraction(_) => vec![],
        Expr::Node(_, args) => args.iter().flat_map(|a| free_symbols(a)).collect(),
    }
}

#[test]
fn addition_canonicalizes_with_the_lesser_operand_first() {
    let x = Symbol::new("x_inv_canon_a");
    let y = Symbol::new("y_inv_canon_b");
    let e = Expr::from(y) + Expr::from(x);
    let result = simplify(&e, &Context::new());
    if let Expr::Node(Op::Add, args) = &result {
        assert!(args[0] <= args[1], "addition operands not in canonical order: {result:?}");
    }
}

#[test]
fn match_then_substitute_reconstructs_the_original_expression() {
    let x = Symbol::new("x_inv_roundtrip");
    let (pv, v) = Pattern::var("v_roundtrip");
    let pattern = Pattern::node(Op::Add, vec![pv, Pattern::AnyConstant]);
    let e = Expr::from(x) + 5i64.c();
    let bindings = extract(&pattern, &e).expect("pattern should match");
    let _ = v;
    let rebuilt = substitute(&pattern, &bindings);
    assert_eq!(rebuilt, e);
}

#[test]
fn repeated_pattern_variable_requires_structurally_equal_operands() {
    let a = Symbol::new("a_inv_rep");
    let b = Symbol::new("b_inv_rep");
    let (pv, v) = Pattern::var("v_rep");
    let rule = Rewrite::new(
        Pattern::node(Op::Add, vec![pv.clone(), pv]),
        Pattern::node(Op::Mul, vec![v_as_var(v), Pattern::Constant(symrw_expr::Constant::Int(2))]),
    );

    let same = Expr::from(a) + Expr::from(a);
    assert_eq!(rule.apply(&same, &Context::new()), Expr::from(a) * 2i64.c());

    let different = Expr::from(a) + Expr::from(b);
    assert_eq!(rule.apply(&different, &Context::new()), different, "mismatched repeats must leave the expression unchanged");
}

fn v_as_var(v: symrw_match::PatternVar) -> Pattern {
    Pattern::Var(v)
}

#[test]
fn derivative_is_linear_over_addition_with_constant_coefficients() {
    let x = Symbol::new("x_inv_lin");
    let alpha = 3i64.c();
    let beta = 5i64.c();
    let f = Expr::from(x).pow(2i64.c());
    let g = sin(Expr::from(x));

    let combined = (alpha.clone() * f.clone()) + (beta.clone() * g.clone());
    let ctx = Context::new();
    let lhs = simplify(&diff_simplified(&combined, x, &ctx), &ctx);

    let rhs_expr = (alpha * diff_simplified(&f, x, &ctx)) + (beta * diff_simplified(&g, x, &ctx));
    let rhs = simplify(&rhs_expr, &ctx);

    assert_eq!(lhs, rhs);
}

#[test]
fn total_order_is_trichotomous_on_a_mixed_sample() {
    let x = Symbol::new("x_inv_tri1");
    let y = Symbol::new("y_inv_tri2");
    let sample = vec![
        Expr::from(x),
        Expr::from(y),
        1i64.c(),
        Expr::from(x) + Expr::from(y),
        Expr::from(x) * Expr::from(y),
    ];
    for a in &sample {
        for b in &sample {
            let lt = a < b;
            let gt = a > b;
            let eq = a == b;
            assert_eq!([lt, gt, eq].iter().filter(|p| **p).count(), 1, "exactly one of <, >, == must hold for {a:?}, {b:?}");
        }
    }
}

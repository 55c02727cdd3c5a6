//! Walkthrough of the two-stage (descend-then-ascend) pipeline, showing
//! where it differs in approach from a plain `full_simplify` even when
//! the two land on the same answer.
//!
//! Run with `cargo run -p symrw-rewrite --example two_stage_simplify_demo`.

use symrw_expr::{Expr, IntoExprLiteral, Symbol};
use symrw_rewrite::{full_simplify, two_stage_simplify, Context};

fn run(label: &str, expr: &Expr, expected: &str) {
    let ctx = Context::new();
    let result = two_stage_simplify(expr, &ctx);
    println!("{label}");
    println!("  expression: {expr}");
    println!("  result:     {result}");
    println!("  expected:   {expected}\n");
}

fn main() {
    let x = Symbol::new("x");
    let y = Symbol::new("y");
    let z = Symbol::new("z");
    let w = Symbol::new("w");

    println!("=== Two-Stage Simplification Demo ===\n");

    run(
        "Test 1: short-circuit annihilator",
        &(0i64.c() * (Expr::from(x) + Expr::from(y) + Expr::from(z) + Expr::from(w))),
        "0",
    );

    run(
        "Test 2: identity short-circuit",
        &(1i64.c() * (Expr::from(x) + Expr::from(y))),
        "x + y",
    );

    run(
        "Test 3: like-term collection on ascent",
        &(Expr::from(x) + Expr::from(x) + Expr::from(x)),
        "3*x",
    );

    run("Test 4: constant folding", &(2i64.c() + 3i64.c() + Expr::from(x)), "5 + x");

    run(
        "Test 5: both phases in one expression",
        &((Expr::from(x) + Expr::from(x)) + (0i64.c() * Expr::from(y)) + 2i64.c() + 3i64.c()),
        "5 + 2*x",
    );

    run(
        "Test 6: nested annihilator",
        &(Expr::from(x) + (0i64.c() * (Expr::from(y) + Expr::from(z))) + Expr::from(w)),
        "w + x (order may vary)",
    );

    println!("Test 7: comparison with full_simplify");
    let expr = 0i64.c() * (Expr::from(x) + Expr::from(y) + Expr::from(z));
    let ctx = Context::new();
    println!("  expression:        {expr}");
    println!("  two_stage result:  {}", two_stage_simplify(&expr, &ctx));
    println!("  full_simplify:     {}", full_simplify(&expr, &ctx));
}

//! A tour of the simplification pipelines, showing what each is suited
//! for rather than treating them as interchangeable.
//!
//! Run with `cargo run -p symrw-rewrite --example simplify_pipelines_demo`.

use symrw_expr::{cos, sin, Expr, IntoExprLiteral, Symbol};
use symrw_rewrite::{algebraic_simplify_recursive, full_simplify, trig_aware_simplify, Context};

fn main() {
    println!("Simplification pipelines\n=========================\n");
    let ctx = Context::new();
    let x = Symbol::new("x");
    let y = Symbol::new("y");
    let z = Symbol::new("z");

    println!("1. full_simplify — exhaustive, innermost + fixpoint");
    println!("   Best for: most use cases.\n");
    {
        let expr = Expr::from(x) * (Expr::from(y) + (Expr::from(z) * 0i64.c()));
        let result = full_simplify(&expr, &ctx);
        println!("   expression: {expr}");
        println!("   result:     {result}\n");
    }

    println!("2. algebraic_simplify_recursive — one bottom-up pass, no fixpoint");
    println!("   Best for: cheap single-pass cleanup on a hot path.\n");
    {
        let expr = (Expr::from(x) + 0i64.c()) * 1i64.c();
        let result = algebraic_simplify_recursive(&expr, &ctx);
        println!("   expression: {expr}");
        println!("   result:     {result}\n");
    }

    println!("3. trig_aware_simplify — algebraic rules plus trig identities");
    println!("   Best for: expressions built from sin/cos/tan.\n");
    {
        let expr = sin(0i64.c()) + (cos(0i64.c()) * Expr::from(x));
        let result = trig_aware_simplify(&expr, &ctx);
        println!("   expression: {expr}");
        println!("   result:     {result}\n");
    }

    println!("4. Composing a custom pipeline from the combinators directly");
    {
        use symrw_rewrite::{bottomup, rules, FixPoint, Strategy};
        let custom = bottomup(rules::all_rules()).fix_point(50);
        let expr = (Expr::from(x) * 2i64.c()) + (Expr::from(x) * 3i64.c());
        println!("   expression: {expr}");
        println!("   result:     {}", custom.apply(&expr, &ctx));
    }
}

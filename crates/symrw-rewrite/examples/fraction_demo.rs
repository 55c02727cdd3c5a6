//! Exact rational arithmetic surviving simplification and evaluation.
//!
//! Run with `cargo run -p symrw-rewrite --example fraction_demo`.

use symrw_expr::{evaluate, Constant, Env, Expr, Fraction, FracLiteral, IntoExprLiteral, Symbol};
use symrw_rewrite::{simplify, Context};

fn show(label: &str, e: &Expr, ctx: &Context) {
    println!("  {label}: {} -> {}", e, simplify(e, ctx));
}

fn main() {
    let ctx = Context::new();

    println!("1. Manual fraction construction");
    println!("   Expr::fraction(1, 2): {}", Expr::fraction(1, 2));
    println!("   1.frac(2): {}", 1i64.frac(2));

    println!("\n2. Automatic reduction");
    show("Fraction(4, 6)", &Expr::fraction(4, 6), &ctx);
    show("Fraction(10, 15)", &Expr::fraction(10, 15), &ctx);

    println!("\n3. Fraction arithmetic via simplify");
    show("1/2 + 1/3", &(1i64.frac(2) + 1i64.frac(3)), &ctx);
    show("2/3 * 3/4", &(2i64.frac(3) * 3i64.frac(4)), &ctx);
    show("(1/2) / (1/3)", &(1i64.frac(2) / 1i64.frac(3)), &ctx);

    println!("\n4. Mixed arithmetic with integer constants");
    show("1/2 + 1", &(1i64.frac(2) + 1i64.c()), &ctx);
    show("2 * (1/3)", &(2i64.c() * 1i64.frac(3)), &ctx);

    println!("\n5. Numeric evaluation");
    let env = Env::new();
    println!("   1/2 as f64: {}", evaluate(&1i64.frac(2), &env).unwrap());
    println!("   1/3 as f64: {}", evaluate(&1i64.frac(3), &env).unwrap());

    println!("\n6. Symbolic expressions mixing fractions and symbols");
    let x = Symbol::new("x");
    let y = Symbol::new("y");
    show("x * (1/2)", &(Expr::from(x) * 1i64.frac(2)), &ctx);
    let combined = (Expr::from(x) * 1i64.frac(2)) + (Expr::from(y) * 1i64.frac(3));
    show("x*(1/2) + y*(1/3)", &combined, &ctx);

    println!("\n7. Ordering");
    println!("   1/3 < 1/2: {}", 1i64.frac(3) < 1i64.frac(2));
    println!("   4/6 == 2/3: {}", Expr::fraction(4, 6) == Expr::fraction(2, 3));

    println!("\n8. Sign normalization");
    println!("   Fraction{{-3, 4}}: {}", Expr::Fraction(Fraction { num: -3, den: 4 }));
    println!("   Fraction{{3, -4}} normalizes to: {}", Expr::fraction(3, -4));

    println!("\n9. Whole-number collapse");
    match Expr::fraction(6, 2) {
        Expr::Constant(Constant::Int(n)) => println!("   6/2 folds directly to Constant({n})"),
        other => println!("   unexpected: {other}"),
    }
}

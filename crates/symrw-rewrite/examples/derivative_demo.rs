//! Symbolic differentiation: single derivatives, higher-order
//! derivatives, and gradients.
//!
//! Run with `cargo run -p symrw-rewrite --example derivative_demo`.

use symrw_expr::{cos, sin, Expr, IntoExprLiteral, Symbol};
use symrw_rewrite::{diff_simplified, gradient, nth_derivative, simplify, Context};

fn main() {
    let ctx = Context::new();
    let x = Symbol::new("x");
    let y = Symbol::new("y");

    println!("1. Power rule");
    let cubic = Expr::from(x).pow(3i64.c());
    println!("   d/dx(x^3) = {}", diff_simplified(&cubic, x, &ctx));

    println!("\n2. Product rule");
    let product = Expr::from(x) * sin(Expr::from(x));
    println!("   d/dx(x * sin(x)) = {}", diff_simplified(&product, x, &ctx));

    println!("\n3. Quotient rule");
    let quotient = sin(Expr::from(x)) / Expr::from(x);
    println!("   d/dx(sin(x)/x) = {}", diff_simplified(&quotient, x, &ctx));

    println!("\n4. Chain rule through a transcendental function");
    let composed = sin(Expr::from(x).pow(2i64.c()));
    println!("   d/dx(sin(x^2)) = {}", diff_simplified(&composed, x, &ctx));

    println!("\n5. Higher-order derivatives");
    for n in 1..=4 {
        let d = simplify(&nth_derivative(&cubic, x, n), &ctx);
        println!("   d^{n}/dx^{n}(x^3) = {d}");
    }

    println!("\n6. Gradient of a multivariate expression");
    let surface = (Expr::from(x) * Expr::from(x)) + (Expr::from(x) * Expr::from(y)) + cos(Expr::from(y));
    let partials = gradient(&surface, &[x, y]);
    for (var, partial) in ["x", "y"].iter().zip(partials.iter()) {
        println!("   d/d{var}(x^2 + x*y + cos(y)) = {}", simplify(partial, &ctx));
    }
}

//! Precedence-aware rendering of expression trees via `Display`.
//!
//! Run with `cargo run -p symrw-rewrite --example pretty_print_demo`.

use symrw_expr::{cos, exp, sin, Expr, IntoExprLiteral, Symbol};

fn main() {
    let x = Symbol::new("x");
    let y = Symbol::new("y");
    let z = Symbol::new("z");

    let expr1 = Expr::from(x) + 1i64.c();
    println!("expr1: {expr1}");

    let expr2 = (Expr::from(x) * Expr::from(y)) + Expr::from(z);
    println!("expr2: {expr2}");

    let expr3 = Expr::from(x).pow(2i64.c()) + (2i64.c() * Expr::from(x) * Expr::from(y)) + Expr::from(y).pow(2i64.c());
    println!("expr3: {expr3}");

    let expr4 = (sin(Expr::from(x)) * cos(Expr::from(y))) + exp(Expr::from(z));
    println!("expr4: {expr4}");

    let expr5 = Expr::from(x) * Expr::from(x) * Expr::from(x);
    println!("cubic: {expr5}");

    let alpha = Symbol::new("alpha");
    let beta = Symbol::new("beta");
    let gamma = Symbol::new("gamma");
    let expr6 = Expr::from(alpha) + (Expr::from(beta) * Expr::from(gamma));
    println!("expr6: {expr6}");

    let expr7 = 5i64.c() + (3i64.c() * 2i64.c());
    println!("expr7: {expr7}");
}

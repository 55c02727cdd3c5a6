//! Command-line driver for the rewriting engine.
//!
//! Provides the `symrwc` command with the following subcommands:
//!
//! - `symrwc demo <name>` — run one of the built-in showcase expressions
//!   and print its simplification/evaluation/differentiation.
//! - `symrwc list` — list the available demo names.

use std::process;

use clap::{Parser, Subcommand};

use symrw_expr::{Env, Expr, IntoExprLiteral, Symbol};
use symrw_rewrite::{diff_simplified, full_simplify, trig_aware_simplify, two_stage_simplify, Context};

#[derive(Parser)]
#[command(name = "symrwc", version, about = "The symbolic rewriting engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one of the built-in showcase expressions
    Demo {
        /// Which demo to run
        name: String,
    },
    /// List the available demo names
    List,
}

const DEMOS: &[&str] = &["fractions", "factoring", "pythagorean", "two-stage", "derivative"];

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for name in DEMOS {
                println!("{name}");
            }
        }
        Commands::Demo { name } => {
            if let Err(e) = run_demo(&name) {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }
}

fn run_demo(name: &str) -> Result<(), String> {
    match name {
        "fractions" => demo_fractions(),
        "factoring" => demo_factoring(),
        "pythagorean" => demo_pythagorean(),
        "two-stage" => demo_two_stage(),
        "derivative" => demo_derivative(),
        other => Err(format!(
            "unknown demo '{other}' (run `symrwc list` for the available names)"
        )),
    }
}

/// Exact rational arithmetic surviving simplification, mirroring the
/// source's fraction-integration walkthrough.
fn demo_fractions() -> Result<(), String> {
    let ctx = Context::new();

    let exact = 6i64.c() / 2i64.c();
    println!("6 / 2 = {}", full_simplify(&exact, &ctx));

    let inexact = 5i64.c() / 2i64.c();
    let folded = full_simplify(&inexact, &ctx);
    println!("5 / 2 = {folded}");
    let env = Env::new();
    println!("  as f64: {}", symrw_expr::evaluate(&folded, &env).map_err(|e| e.to_string())?);

    let x = Symbol::new("x");
    let combined = (Expr::from(x) * (1i64.c() / 3i64.c())) + (Expr::from(x) * (2i64.c() / 3i64.c()));
    println!("x*(1/3) + x*(2/3) = {}", full_simplify(&combined, &ctx));
    Ok(())
}

/// Like-terms factoring collapsing a sum of scaled copies of the same
/// variable.
fn demo_factoring() -> Result<(), String> {
    let ctx = Context::new();
    let x = Symbol::new("x");
    let expr = (Expr::from(x) * 2i64.c()) + (Expr::from(x) * 3i64.c());
    println!("x*2 + x*3 = {}", full_simplify(&expr, &ctx));
    Ok(())
}

/// `sin²(x) + cos²(x) → 1`, which only fires under the trig-aware
/// pipeline.
fn demo_pythagorean() -> Result<(), String> {
    let ctx = Context::new();
    let x = Symbol::new("x");
    let expr = symrw_expr::sin(Expr::from(x)).pow(2i64.c()) + symrw_expr::cos(Expr::from(x)).pow(2i64.c());
    println!("sin(x)^2 + cos(x)^2 = {}", trig_aware_simplify(&expr, &ctx));
    Ok(())
}

/// A dead multiplicative subtree annihilated before the engine bothers
/// descending into it.
fn demo_two_stage() -> Result<(), String> {
    let ctx = Context::new();
    let x = Symbol::new("x");
    let dead = Expr::from(x) + Expr::from(x) + Expr::from(x);
    let expr = 0i64.c() * dead;
    println!("0 * (x + x + x) = {}", two_stage_simplify(&expr, &ctx));
    Ok(())
}

/// `d/dx(x^3)`, simplified.
fn demo_derivative() -> Result<(), String> {
    let ctx = Context::new();
    let x = Symbol::new("x");
    let expr = Expr::from(x).pow(3i64.c());
    println!("d/dx(x^3) = {}", diff_simplified(&expr, x, &ctx));
    Ok(())
}

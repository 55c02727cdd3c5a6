//! Precedence-aware rendering of [`Expr`] trees (`spec.md` §4.6).

use std::fmt;

use crate::expr::Expr;
use crate::op::{DisplayMode, Op, Precedence};

/// Write `expr`, parenthesizing it if its own precedence binds looser
/// than `parent_precedence` (the precedence of the operator it is being
/// rendered as an argument of).
pub fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, parent_precedence: Precedence) -> fmt::Result {
    match expr {
        Expr::Symbol(s) => write!(f, "{s}"),
        Expr::Constant(c) => write!(f, "{c}"),
        Expr::Fraction(frac) => write!(f, "{frac}"),
        Expr::Node(op, args) => write_node(f, *op, args, parent_precedence),
    }
}

/// The next tier up from `p`, used to force parenthesization of a
/// right operand that shares its parent's precedence exactly — `Sub`,
/// `Div`, and `Pow` are not associative, so `a - (b - c)` must not
/// render the same as `(a - b) - c`.
fn tighten(p: Precedence) -> Precedence {
    match p {
        Precedence::Addition => Precedence::Multiplication,
        Precedence::Multiplication => Precedence::Power,
        Precedence::Power => Precedence::Unary,
        Precedence::Unary => Precedence::Atomic,
        Precedence::Atomic => Precedence::Atomic,
    }
}

fn write_node(
    f: &mut fmt::Formatter<'_>,
    op: Op,
    args: &[std::rc::Rc<Expr>],
    parent_precedence: Precedence,
) -> fmt::Result {
    let own_precedence = op.precedence();
    let needs_parens = own_precedence < parent_precedence;
    if needs_parens {
        write!(f, "(")?;
    }
    match op.display_mode() {
        DisplayMode::Prefix if args.is_empty() => {
            write!(f, "{}", op.display_symbol())?;
        }
        DisplayMode::Prefix => {
            write!(f, "{}(", op.display_symbol())?;
            for (i, a) in args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_expr(f, a, Precedence::Addition)?;
            }
            write!(f, ")")?;
        }
        DisplayMode::Infix => {
            let sym = op.display_symbol();
            let non_associative = matches!(op, Op::Sub | Op::Div | Op::Pow) && args.len() == 2;
            for (i, a) in args.iter().enumerate() {
                if i > 0 {
                    write!(f, " {sym} ")?;
                }
                let operand_precedence = if non_associative && i == 1 {
                    tighten(own_precedence)
                } else {
                    own_precedence
                };
                write_expr(f, a, operand_precedence)?;
            }
        }
    }
    if needs_parens {
        write!(f, ")")?;
    }
    Ok(())
}

//! Boolean matcher and binding extractor (`spec.md` §4.4).

use symrw_expr::{Constant, Expr, Fraction};

use crate::bindings::Bindings;
use crate::pattern::Pattern;

/// Decide whether `pattern` matches `expr`, without extracting
/// bindings. Implements the dispatch-priority pyramid from §4.4:
/// `Never` first (always fails), then identical literal leaves/nodes,
/// then wildcards, then structural recursion; anything else fails.
///
/// A repeated `PatternVar` is *not* checked for consistency here — a
/// bare boolean check always accepts a pattern variable, since
/// consistency is only meaningful relative to a binding map. Use
/// [`extract`] when repeated variables must agree.
pub fn matches(pattern: &Pattern, expr: &Expr) -> bool {
    match pattern {
        Pattern::Never => false,
        Pattern::AnyArg | Pattern::Var(_) => true,
        Pattern::AnyExpr => expr.is_expression(),
        Pattern::AnyConstant => expr.is_constant(),
        Pattern::AnySymbol => expr.is_symbol(),
        Pattern::Symbol(s) => matches!(expr, Expr::Symbol(e) if e == s),
        Pattern::Constant(c) => constant_matches(*c, expr),
        Pattern::Fraction(f) => fraction_matches(*f, expr),
        Pattern::Node(op, arg_patterns) => match expr {
            Expr::Node(eop, eargs) => {
                eop == op
                    && arg_patterns.len() == eargs.len()
                    && arg_patterns
                        .iter()
                        .zip(eargs.iter())
                        .all(|(p, a)| matches(p, a))
            }
            _ => false,
        },
    }
}

fn constant_matches(c: Constant, expr: &Expr) -> bool {
    match (c, expr) {
        (Constant::Int(n), Expr::Constant(Constant::Int(m))) => n == m,
        (Constant::Float(f), Expr::Constant(Constant::Float(g))) => f == *g,
        // Fraction<n,1> matches Constant<n> (spec.md §4.4 rule 4); an
        // `Expr::Fraction` is never actually built with den == 1 (see
        // `Expr::fraction`), so this only fires for a manually
        // constructed pattern literal.
        (Constant::Int(n), Expr::Fraction(f)) => f.den == 1 && f.num == n,
        _ => false,
    }
}

fn fraction_matches(pat: Fraction, expr: &Expr) -> bool {
    match expr {
        Expr::Fraction(ef) => pat.cmp_cross(*ef) == std::cmp::Ordering::Equal,
        Expr::Constant(Constant::Int(n)) => {
            pat.cmp_cross(Fraction { num: *n, den: 1 }) == std::cmp::Ordering::Equal
        }
        _ => false,
    }
}

/// Match `pattern` against `expr`, extracting bindings for every
/// `PatternVar` encountered. Returns `None` on a structural mismatch or
/// on a binding-consistency violation (the same `VarId` capturing two
/// structurally different sub-expressions, §3 "Binding consistency").
pub fn extract(pattern: &Pattern, expr: &Expr) -> Option<Bindings> {
    let mut bindings = Bindings::new();
    if extract_into(pattern, expr, &mut bindings) {
        Some(bindings)
    } else {
        None
    }
}

fn extract_into(pattern: &Pattern, expr: &Expr, bindings: &mut Bindings) -> bool {
    match pattern {
        Pattern::Never => false,
        Pattern::AnyArg => true,
        Pattern::AnyExpr => expr.is_expression(),
        Pattern::AnyConstant => expr.is_constant(),
        Pattern::AnySymbol => expr.is_symbol(),
        Pattern::Symbol(s) => matches!(expr, Expr::Symbol(e) if e == s),
        Pattern::Constant(c) => constant_matches(*c, expr),
        Pattern::Fraction(f) => fraction_matches(*f, expr),
        Pattern::Var(v) => match bindings.get(v.id()) {
            Some(prior) => prior == expr,
            None => {
                bindings.insert(v.id(), expr.clone());
                true
            }
        },
        Pattern::Node(op, arg_patterns) => match expr {
            Expr::Node(eop, eargs) => {
                eop == op
                    && arg_patterns.len() == eargs.len()
                    && arg_patterns
                        .iter()
                        .zip(eargs.iter())
                        .all(|(p, a)| extract_into(p, a, bindings))
            }
            _ => false,
        },
    }
}

//! `substitute(template, bindings)` (`spec.md` §4.4).

use symrw_expr::Expr;

use crate::bindings::Bindings;
use crate::pattern::Pattern;

/// Walk `template`, replacing every `PatternVar` with its bound
/// sub-expression and rebuilding everything else structurally.
///
/// Panics if `template` contains a `PatternVar` with no entry in
/// `bindings`, or a wildcard/`Never` sentinel — those only make sense on
/// the matching side; a template that reaches this function should have
/// come from a successful [`crate::matcher::extract`] against the same
/// pattern shape, so every variable it names is bound.
pub fn substitute(template: &Pattern, bindings: &Bindings) -> Expr {
    match template {
        Pattern::Var(v) => bindings
            .get(v.id())
            .cloned()
            .unwrap_or_else(|| panic!("unbound pattern variable `{}` in substitution template", v.name())),
        Pattern::Symbol(s) => Expr::Symbol(*s),
        Pattern::Constant(c) => Expr::Constant(*c),
        Pattern::Fraction(f) => Expr::Fraction(*f),
        Pattern::Node(op, args) => {
            let args = args.iter().map(|a| substitute(a, bindings)).collect();
            Expr::node(*op, args)
        }
        Pattern::AnyArg | Pattern::AnyExpr | Pattern::AnyConstant | Pattern::AnySymbol => {
            panic!("wildcard pattern used as a substitution template")
        }
        Pattern::Never => panic!("`Never` pattern used as a substitution template"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{Constant, IntoExprLiteral, Op, Symbol};

    #[test]
    fn substitutes_bound_variable() {
        let x = Symbol::new("x_sub");
        let (pv, v) = Pattern::var("v_sub");
        let template = Pattern::node(Op::Mul, vec![pv, Pattern::Constant(Constant::Int(2))]);
        let mut bindings = Bindings::new();
        bindings.insert(v.id(), Expr::from(x));
        let result = substitute(&template, &bindings);
        assert_eq!(result, Expr::from(x) * 2i64.c());
    }

    #[test]
    #[should_panic(expected = "unbound pattern variable")]
    fn unbound_variable_panics() {
        let (template, _) = Pattern::var("v_unbound");
        substitute(&template, &Bindings::new());
    }
}

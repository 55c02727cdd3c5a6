//! Predicate combinators a `Rewrite` can attach to veto an otherwise
//! matching rule (`spec.md` §4.4).

use symrw_expr::Expr;

use crate::bindings::Bindings;
use crate::pattern::VarId;

/// A predicate receives the bindings a match produced and decides
/// whether the rule should still fire.
pub trait Predicate {
    fn test(&self, bindings: &Bindings) -> bool;

    fn and<P: Predicate>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
    {
        And(self, other)
    }

    fn or<P: Predicate>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<F: Fn(&Bindings) -> bool> Predicate for F {
    fn test(&self, bindings: &Bindings) -> bool {
        self(bindings)
    }
}

pub struct And<A, B>(A, B);
impl<A: Predicate, B: Predicate> Predicate for And<A, B> {
    fn test(&self, bindings: &Bindings) -> bool {
        self.0.test(bindings) && self.1.test(bindings)
    }
}

pub struct Or<A, B>(A, B);
impl<A: Predicate, B: Predicate> Predicate for Or<A, B> {
    fn test(&self, bindings: &Bindings) -> bool {
        self.0.test(bindings) || self.1.test(bindings)
    }
}

pub struct Not<A>(A);
impl<A: Predicate> Predicate for Not<A> {
    fn test(&self, bindings: &Bindings) -> bool {
        !self.0.test(bindings)
    }
}

/// Always succeeds; the default predicate for a `Rewrite` that doesn't
/// need one.
pub fn always_true() -> impl Predicate {
    |_: &Bindings| true
}

fn binding_of<'a>(bindings: &'a Bindings, id: VarId) -> &'a Expr {
    bindings
        .get(id)
        .unwrap_or_else(|| panic!("predicate referenced an unbound variable"))
}

pub fn is_constant(id: VarId) -> impl Predicate {
    move |b: &Bindings| binding_of(b, id).is_constant()
}

pub fn is_symbol(id: VarId) -> impl Predicate {
    move |b: &Bindings| binding_of(b, id).is_symbol()
}

pub fn is_expression(id: VarId) -> impl Predicate {
    move |b: &Bindings| binding_of(b, id).is_expression()
}

/// `var_less_than(x_, y_)`: true iff the expression bound to `x` sorts
/// strictly before the one bound to `y` in the total ordering
/// (`symrw_expr::ordering`). Used by the addition/multiplication rules
/// to decide whether a canonical-orientation swap is needed.
pub fn var_less_than(x: VarId, y: VarId) -> impl Predicate {
    move |b: &Bindings| binding_of(b, x) < binding_of(b, y)
}

/// True iff the expression bound to `id` is a constant numerically
/// equal to `value`.
pub fn numeric_eq(id: VarId, value: f64) -> impl Predicate {
    move |b: &Bindings| match binding_of(b, id) {
        Expr::Constant(c) => c.as_f64() == value,
        Expr::Fraction(f) => f.as_f64() == value,
        _ => false,
    }
}

/// True iff the expressions bound to `x` and `y` are structurally equal
/// (the same variable captured twice, or two occurrences that happen to
/// capture equal sub-expressions).
pub fn var_eq(x: VarId, y: VarId) -> impl Predicate {
    move |b: &Bindings| binding_of(b, x) == binding_of(b, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{IntoExprLiteral, Symbol};

    #[test]
    fn and_or_not_compose() {
        let x = crate::pattern::PatternVar::new("x_pred");
        let mut bindings = Bindings::new();
        bindings.insert(x.id(), 1i64.c());

        let p = is_constant(x.id()).and(is_symbol(x.id()).negate());
        assert!(p.test(&bindings));

        let q = is_symbol(x.id()).or(is_constant(x.id()));
        assert!(q.test(&bindings));
    }

    #[test]
    fn var_less_than_uses_total_ordering() {
        let xv = crate::pattern::PatternVar::new("x_cmp");
        let yv = crate::pattern::PatternVar::new("y_cmp");
        let x = Symbol::new("x_ord");
        let y = Symbol::new("y_ord");
        let mut bindings = Bindings::new();
        bindings.insert(xv.id(), Expr::from(x));
        bindings.insert(yv.id(), Expr::from(y));
        let p = var_less_than(xv.id(), yv.id());
        // Symbols order by declaration identity, so whichever of x/y
        // was minted first sorts first; just check the predicate agrees
        // with a direct comparison rather than assuming which way.
        assert_eq!(p.test(&bindings), Expr::from(x) < Expr::from(y));
    }
}

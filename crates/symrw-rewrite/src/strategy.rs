//! Strategy combinator algebra (`spec.md` §4.6).
//!
//! Every strategy is a total function `apply(expr, ctx) -> expr'`;
//! failure is signalled by returning the input unchanged, the
//! convention `spec.md` itself calls "preferred" — the `Never` sentinel
//! it also mentions is reserved for the matcher's internal channels
//! (`symrw_match::pattern::Pattern::Never`) and never appears at this
//! layer (see `SPEC_FULL.md` §4).

use symrw_expr::Expr;

use crate::context::Context;

/// Anything that can rewrite one expression into another.
pub trait Strategy {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr;

    fn then<S: Strategy>(self, next: S) -> Sequence<Self, S>
    where
        Self: Sized,
    {
        Sequence(self, next)
    }

    fn or<S: Strategy>(self, alt: S) -> Choice<Self, S>
    where
        Self: Sized,
    {
        Choice(self, alt)
    }

    fn or_try(self) -> Try<Self>
    where
        Self: Sized,
    {
        Try(self)
    }

    fn when<P>(self, pred: P) -> When<P, Self>
    where
        Self: Sized,
        P: Fn(&Expr, &Context) -> bool,
    {
        When(pred, self)
    }

    fn repeat(self, n: u32) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat { strategy: self, n }
    }

    fn fix_point(self, cap: u32) -> FixPoint<Self>
    where
        Self: Sized,
    {
        FixPoint {
            strategy: self,
            cap,
        }
    }
}

impl<F: Fn(&Expr, &Context) -> Expr> Strategy for F {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        self(expr, ctx)
    }
}

/// Always succeeds, returning the input unchanged.
pub struct Identity;
impl Strategy for Identity {
    fn apply(&self, expr: &Expr, _ctx: &Context) -> Expr {
        expr.clone()
    }
}

/// Always fails. Under the "unchanged means failure" convention this is
/// observationally identical to [`Identity`]; it exists so pipelines can
/// name a strategy that is never meant to change anything (e.g. the zero
/// element of a `Choice` chain being built up in a loop).
pub struct Fail;
impl Strategy for Fail {
    fn apply(&self, expr: &Expr, _ctx: &Context) -> Expr {
        expr.clone()
    }
}

/// `s1 >> s2`: apply `s1`, then `s2` to its result.
pub struct Sequence<A, B>(A, B);
impl<A: Strategy, B: Strategy> Strategy for Sequence<A, B> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        let mid = self.0.apply(expr, ctx);
        self.1.apply(&mid, ctx)
    }
}

/// `s1 | s2`: try `s1`; if it left the expression unchanged, try `s2`.
pub struct Choice<A, B>(A, B);
impl<A: Strategy, B: Strategy> Strategy for Choice<A, B> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        let first = self.0.apply(expr, ctx);
        if first != *expr {
            first
        } else {
            self.1.apply(expr, ctx)
        }
    }
}

/// `Try(s)`: apply `s`; since every strategy here already reports
/// failure as "unchanged", this is a pass-through kept for parity with
/// the combinator kit named in `spec.md` §6.
pub struct Try<S>(S);
impl<S: Strategy> Strategy for Try<S> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        self.0.apply(expr, ctx)
    }
}

/// `When(pred, s)`: apply `s` only when `pred(expr, ctx)` holds.
pub struct When<P, S>(P, S);
impl<P: Fn(&Expr, &Context) -> bool, S: Strategy> Strategy for When<P, S> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        if self.0(expr, ctx) {
            self.1.apply(expr, ctx)
        } else {
            expr.clone()
        }
    }
}

/// `Repeat<N>(s)`: apply `s` exactly `n` times, unconditionally.
pub struct Repeat<S> {
    strategy: S,
    n: u32,
}
impl<S: Strategy> Strategy for Repeat<S> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        let mut current = expr.clone();
        for _ in 0..self.n {
            current = self.strategy.apply(&current, ctx);
        }
        current
    }
}

/// `FixPoint<Cap>(s)`: repeatedly apply `s` until a pass leaves the term
/// unchanged (convergence) or `cap` iterations are reached.
pub struct FixPoint<S> {
    strategy: S,
    cap: u32,
}
impl<S: Strategy> Strategy for FixPoint<S> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        let mut current = expr.clone();
        for _ in 0..self.cap {
            let next = self.strategy.apply(&current, ctx);
            if next == current {
                return next;
            }
            current = next;
        }
        current
    }
}

/// Default fix-point iteration cap (`spec.md` §5: "implementations
/// commonly use 100").
pub const DEFAULT_FIXPOINT_CAP: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{IntoExprLiteral, Symbol};

    fn add_zero() -> impl Strategy {
        |expr: &Expr, _ctx: &Context| match expr {
            Expr::Node(symrw_expr::Op::Add, args) if args.len() == 2 => {
                if *args[0] == 0i64.c() {
                    (*args[1]).clone()
                } else if *args[1] == 0i64.c() {
                    (*args[0]).clone()
                } else {
                    expr.clone()
                }
            }
            _ => expr.clone(),
        }
    }

    #[test]
    fn identity_never_changes_input() {
        let x = Symbol::new("x_strat_id");
        let e = Expr::from(x);
        assert_eq!(Identity.apply(&e, &Context::new()), e);
    }

    #[test]
    fn choice_falls_through_to_second_on_no_change() {
        let x = Symbol::new("x_strat_choice");
        let e = Expr::from(x) + 1i64.c();
        let strat = Fail.or(add_zero());
        // add_zero doesn't match this shape (neither operand is 0), so
        // both arms report failure and the result is unchanged.
        assert_eq!(strat.apply(&e, &Context::new()), e);
    }

    #[test]
    fn choice_prefers_first_successful_branch() {
        let x = Symbol::new("x_strat_choice2");
        let e = 0i64.c() + Expr::from(x);
        let strat = add_zero().or(Identity);
        assert_eq!(strat.apply(&e, &Context::new()), Expr::from(x));
    }

    #[test]
    fn repeat_applies_exactly_n_times() {
        let inc = |expr: &Expr, _ctx: &Context| match expr {
            Expr::Constant(symrw_expr::Constant::Int(n)) => Expr::Constant(symrw_expr::Constant::Int(n + 1)),
            _ => expr.clone(),
        };
        let strat = inc.repeat(3);
        assert_eq!(strat.apply(&0i64.c(), &Context::new()), 3i64.c());
    }

    #[test]
    fn fix_point_stops_at_convergence() {
        let strat = add_zero().fix_point(DEFAULT_FIXPOINT_CAP);
        let x = Symbol::new("x_strat_fix");
        let e = 0i64.c() + Expr::from(x);
        assert_eq!(strat.apply(&e, &Context::new()), Expr::from(x));
    }
}

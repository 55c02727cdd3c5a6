//! Simplification pipelines (`spec.md` §4.7 "Pipelines").
//!
//! Each pipeline composes the combinators from [`crate::strategy`] and
//! [`crate::traversal`] over [`crate::rules::all_rules`] (or a variant).
//! None of them recurse past [`crate::context::Context::at_depth_limit`]
//! and `simplify`/`full_simplify` never loop past
//! [`crate::strategy::DEFAULT_FIXPOINT_CAP`] iterations — hitting either
//! limit is the "graceful stop" `spec.md` §5 calls for, not an error.

use symrw_expr::Expr;

use crate::context::Context;
use crate::rules;
use crate::strategy::{Strategy, DEFAULT_FIXPOINT_CAP};
use crate::traversal::{bottomup, topdown};

/// One pass of the full algebraic `RewriteSystem` at the root node only —
/// no recursion into children.
pub fn algebraic_simplify(expr: &Expr, ctx: &Context) -> Expr {
    rules::all_rules().apply(expr, ctx)
}

/// A single bottom-up traversal pass of the algebraic rules.
pub fn algebraic_simplify_recursive(expr: &Expr, ctx: &Context) -> Expr {
    bottomup(rules::all_rules()).apply(expr, ctx)
}

/// A single bottom-up traversal pass (`spec.md` names this and
/// `algebraic_simplify_recursive` as the same shape).
pub fn bottomup_simplify(expr: &Expr, ctx: &Context) -> Expr {
    bottomup(rules::all_rules()).apply(expr, ctx)
}

/// A single top-down traversal pass.
pub fn topdown_simplify(expr: &Expr, ctx: &Context) -> Expr {
    topdown(rules::all_rules()).apply(expr, ctx)
}

/// The canonical entry point: `FixPoint(innermost(all_rules))` with the
/// depth guard carried by `ctx` and the default iteration cap. Public API
/// calls that don't name a specific pipeline dispatch here.
pub fn full_simplify(expr: &Expr, ctx: &Context) -> Expr {
    crate::traversal::innermost(rules::all_rules())
        .fix_point(DEFAULT_FIXPOINT_CAP)
        .apply(expr, ctx)
}

/// Alias for [`full_simplify`] (`spec.md` §4.7: `simplify ≡ full_simplify`).
pub fn simplify(expr: &Expr, ctx: &Context) -> Expr {
    full_simplify(expr, ctx)
}

/// Same shape as [`full_simplify`] but with the double-angle and
/// Pythagorean expansion rules included.
pub fn trig_aware_simplify(expr: &Expr, ctx: &Context) -> Expr {
    crate::traversal::innermost(rules::all_rules_trig_aware())
        .fix_point(DEFAULT_FIXPOINT_CAP)
        .apply(expr, ctx)
}

/// A performance-oriented variant: a top-down descent pass of *quick
/// annihilators* first (so a higher-level `0·_ → 0` doesn't pay to
/// recurse into a subtree it's about to discard), then a bottom-up
/// ascent pass for term collection and factoring, repeated to
/// fix-point.
pub fn two_stage_simplify(expr: &Expr, ctx: &Context) -> Expr {
    let descend_then_ascend = |e: &Expr, c: &Context| -> Expr {
        let descended = topdown(rules::quick_annihilators()).apply(e, c);
        bottomup(rules::all_rules()).apply(&descended, c)
    };
    descend_then_ascend
        .fix_point(DEFAULT_FIXPOINT_CAP)
        .apply(expr, ctx)
}

/// A `full_simplify` that stops at a caller-supplied depth rather than
/// the context's own guard — useful for callers that want to bound cost
/// without mutating `ctx` itself.
pub fn bounded_simplify(expr: &Expr, max_depth: u32) -> Expr {
    let ctx = Context::new().with_max_depth(max_depth);
    full_simplify(expr, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{Constant, Expr as E, IntoExprLiteral, Symbol};

    #[test]
    fn full_simplify_collects_like_terms_through_nested_structure() {
        let x = Symbol::new("x_pipe1");
        let e = (E::from(x) + 0i64.c()) + E::from(x);
        assert_eq!(full_simplify(&e, &Context::new()), E::from(x) * 2i64.c());
    }

    #[test]
    fn full_simplify_folds_constants_and_identities_together() {
        let x = Symbol::new("x_pipe2");
        let e = (1i64.c() * E::from(x)) + (2i64.c() + 3i64.c());
        assert_eq!(full_simplify(&e, &Context::new()), E::from(x) + 5i64.c());
    }

    #[test]
    fn trig_aware_simplify_applies_pythagorean_identity() {
        let x = Symbol::new("x_pipe3");
        let e = symrw_expr::sin(E::from(x)).pow(2i64.c()) + symrw_expr::cos(E::from(x)).pow(2i64.c());
        assert_eq!(trig_aware_simplify(&e, &Context::new()), Expr::Constant(Constant::Int(1)));
    }

    #[test]
    fn two_stage_simplify_annihilates_before_descending() {
        let x = Symbol::new("x_pipe4");
        let dead_subtree = E::from(x) + E::from(x) + E::from(x);
        let e = 0i64.c() * dead_subtree;
        assert_eq!(two_stage_simplify(&e, &Context::new()), 0i64.c());
    }

    #[test]
    fn bounded_simplify_caps_recursion_depth() {
        let x = Symbol::new("x_pipe5");
        let e = ((E::from(x) + 0i64.c()) + 0i64.c()) + 0i64.c();
        let result = bounded_simplify(&e, 0);
        assert_eq!(result, e, "zero-depth bound leaves the tree untouched");
    }
}

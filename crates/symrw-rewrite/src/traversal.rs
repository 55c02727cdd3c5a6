//! Traversal combinators (`spec.md` §4.6): drive a node strategy over an
//! entire tree instead of a single node.
//!
//! Each traversal checks [`Context::at_depth_limit`] before recursing
//! into children and returns its input unchanged once the guard trips
//! (`spec.md` §5's "graceful stop", not an error).

use symrw_expr::Expr;

use crate::context::Context;
use crate::strategy::{Strategy, DEFAULT_FIXPOINT_CAP};

fn recurse_into_children<S: Strategy>(strategy: &S, expr: &Expr, ctx: &Context) -> Expr {
    match expr {
        Expr::Node(op, args) => {
            let child_ctx = ctx.enter();
            let new_args = args.iter().map(|a| strategy.apply(a, &child_ctx)).collect();
            Expr::node(*op, new_args)
        }
        _ => expr.clone(),
    }
}

/// Post-order: transform every sub-expression with this same traversal
/// first, then apply the wrapped strategy to the reconstructed node.
pub struct Bottomup<S>(pub S);
impl<S: Strategy> Strategy for Bottomup<S> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        if ctx.at_depth_limit() {
            return expr.clone();
        }
        let recursed = recurse_into_children(self, expr, ctx);
        self.0.apply(&recursed, ctx)
    }
}

/// `fold`, an alias for [`Bottomup`] (`spec.md` §4.6 names both).
pub fn fold<S: Strategy>(s: S) -> Bottomup<S> {
    Bottomup(s)
}
pub fn bottomup<S: Strategy>(s: S) -> Bottomup<S> {
    Bottomup(s)
}

/// Pre-order: apply the wrapped strategy to the node first, then
/// recurse into the sub-expressions of whatever it produced.
pub struct Topdown<S>(pub S);
impl<S: Strategy> Strategy for Topdown<S> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        if ctx.at_depth_limit() {
            return expr.clone();
        }
        let transformed = self.0.apply(expr, ctx);
        recurse_into_children(self, &transformed, ctx)
    }
}

/// `unfold`, an alias for [`Topdown`].
pub fn unfold<S: Strategy>(s: S) -> Topdown<S> {
    Topdown(s)
}
pub fn topdown<S: Strategy>(s: S) -> Topdown<S> {
    Topdown(s)
}

/// Bottom-up with an embedded fix-point per node: keep applying the
/// wrapped strategy at a node until it stops changing (or `cap` is
/// reached), then propagate the stable result up to the parent.
pub struct Innermost<S> {
    pub strategy: S,
    pub cap: u32,
}
impl<S: Strategy> Strategy for Innermost<S> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        if ctx.at_depth_limit() {
            return expr.clone();
        }
        let recursed = recurse_into_children(self, expr, ctx);
        let mut current = recursed;
        for _ in 0..self.cap {
            let next = self.strategy.apply(&current, ctx);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}

pub fn innermost<S: Strategy>(s: S) -> Innermost<S> {
    Innermost {
        strategy: s,
        cap: DEFAULT_FIXPOINT_CAP,
    }
}

/// Top-down with retry: apply the wrapped strategy to the root; if it
/// changed the root, restart from the (new) root rather than descending.
/// Once the root is stable, recurse into children the same way.
pub struct Outermost<S> {
    pub strategy: S,
    pub cap: u32,
}
impl<S: Strategy> Strategy for Outermost<S> {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        if ctx.at_depth_limit() {
            return expr.clone();
        }
        let mut current = expr.clone();
        for _ in 0..self.cap {
            let transformed = self.strategy.apply(&current, ctx);
            if transformed == current {
                break;
            }
            current = transformed;
        }
        recurse_into_children(self, &current, ctx)
    }
}

pub fn outermost<S: Strategy>(s: S) -> Outermost<S> {
    Outermost {
        strategy: s,
        cap: DEFAULT_FIXPOINT_CAP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symrw_expr::{IntoExprLiteral, Op, Symbol};

    fn fold_add_zero(expr: &Expr, _ctx: &Context) -> Expr {
        match expr {
            Expr::Node(Op::Add, args) if args.len() == 2 => {
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
    fn bottomup_simplifies_nested_zero_additions() {
        let x = Symbol::new("x_bu");
        let e = (0i64.c() + Expr::from(x)) + (0i64.c() + 0i64.c());
        let result = bottomup(fold_add_zero).apply(&e, &Context::new());
        assert_eq!(result, Expr::from(x));
    }

    #[test]
    fn innermost_reaches_fixpoint_at_each_node() {
        let x = Symbol::new("x_inner");
        let e = 0i64.c() + (0i64.c() + Expr::from(x));
        let result = innermost(fold_add_zero).apply(&e, &Context::new());
        assert_eq!(result, Expr::from(x));
    }

    #[test]
    fn depth_guard_stops_recursion() {
        let x = Symbol::new("x_depth");
        let e = (Expr::from(x) + 1i64.c()) + 2i64.c();
        let ctx = Context::new().with_max_depth(0);
        let result = bottomup(fold_add_zero).apply(&e, &ctx);
        assert_eq!(result, e, "depth limit reached immediately, so nothing recurses");
    }
}

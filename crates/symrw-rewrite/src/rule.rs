//! The `Rewrite` primitive and `RewriteSystem` container (`spec.md`
//! §4.7 "Rule primitive").

use symrw_expr::Expr;
use symrw_match::{extract, predicate::always_true, substitute, Pattern, Predicate};

use crate::context::Context;
use crate::strategy::Strategy;

/// `Rewrite{pattern, replacement, predicate}`: when applied to `E`, it
/// extracts bindings for `pattern`; if extraction succeeds *and* the
/// predicate holds, it substitutes `replacement` with those bindings;
/// otherwise it returns `E` unchanged.
pub struct Rewrite {
    pattern: Pattern,
    replacement: Pattern,
    predicate: Box<dyn Predicate>,
}

impl Rewrite {
    pub fn new(pattern: Pattern, replacement: Pattern) -> Self {
        Rewrite {
            pattern,
            replacement,
            predicate: Box::new(always_true()),
        }
    }

    pub fn with_predicate(pattern: Pattern, replacement: Pattern, predicate: impl Predicate + 'static) -> Self {
        Rewrite {
            pattern,
            replacement,
            predicate: Box::new(predicate),
        }
    }
}

impl Strategy for Rewrite {
    fn apply(&self, expr: &Expr, _ctx: &Context) -> Expr {
        match extract(&self.pattern, expr) {
            Some(bindings) if self.predicate.test(&bindings) => substitute(&self.replacement, &bindings),
            _ => expr.clone(),
        }
    }
}

/// A set of strategies tried in declaration order; the first one whose
/// output differs from its input wins (`spec.md` §4.7).
pub struct RewriteSystem(Vec<Box<dyn Strategy>>);

impl RewriteSystem {
    pub fn new(rules: Vec<Box<dyn Strategy>>) -> Self {
        RewriteSystem(rules)
    }
}

impl Strategy for RewriteSystem {
    fn apply(&self, expr: &Expr, ctx: &Context) -> Expr {
        for rule in &self.0 {
            let result = rule.apply(expr, ctx);
            if result != *expr {
                return result;
            }
        }
        expr.clone()
    }
}

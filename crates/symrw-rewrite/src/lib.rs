//! Rewrite engine: strategy combinators, traversal, the rule library,
//! and the simplification/differentiation pipelines built on top of
//! [`symrw_expr`] and [`symrw_match`] (`spec.md` §4.6, §4.7, §6).

pub mod context;
pub mod diff;
pub mod pipeline;
pub mod rule;
pub mod rules;
pub mod strategy;
pub mod traversal;

pub use context::{default_context, numeric_context, symbolic_context, Context, Tag, DEFAULT_MAX_DEPTH};
pub use diff::{diff, diff_simplified, gradient, nth_derivative};
pub use pipeline::{
    algebraic_simplify, algebraic_simplify_recursive, bottomup_simplify, bounded_simplify,
    full_simplify, simplify, topdown_simplify, trig_aware_simplify, two_stage_simplify,
};
pub use rule::{Rewrite, RewriteSystem};
pub use rules::{all_rules, all_rules_trig_aware, quick_annihilators};
pub use strategy::{
    Choice, Fail, FixPoint, Identity, Repeat, Sequence, Strategy, Try, When, DEFAULT_FIXPOINT_CAP,
};
pub use traversal::{bottomup, fold, innermost, outermost, topdown, unfold, Bottomup, Innermost, Outermost, Topdown};

pub use symrw_match::{extract, matches, substitute, Bindings, Pattern, PatternVar, Predicate, VarId};

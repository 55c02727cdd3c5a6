//! The authoritative rule inventory (`spec.md` §4.7 "Rule categories").

pub mod addition;
pub mod constant_fold;
pub mod exp_log;
pub mod hyperbolic;
pub mod multiplication;
pub mod power;
pub mod pythagorean;
pub mod sub_div;
pub mod trig;

use crate::rule::RewriteSystem;
use crate::strategy::Strategy;
use symrw_expr::Expr;

/// Every category from `spec.md` §4.7, in the order most likely to make
/// early progress: constant folding and the `0`/`1` identities first
/// (cheapest, most frequently applicable), then normalization, then the
/// transcendental and trig/hyperbolic tables. Does not include the
/// double-angle table (opt-in, see [`trig::double_angle_rules`]) or
/// explicit-only strategies (`multiplication::distribute`,
/// `trig::tan_to_sin_cos`).
pub fn all_rules() -> RewriteSystem {
    RewriteSystem::new(vec![
        Box::new(constant_fold::constant_folding()),
        Box::new(sub_div::sub_div_rules()),
        Box::new(addition::addition_rules()),
        Box::new(multiplication::multiplication_rules()),
        Box::new(exp_log::exp_log_rules()),
        Box::new(trig::trig_rules()),
        Box::new(pythagorean::pythagorean_rules()),
        Box::new(hyperbolic::hyperbolic_rules()),
    ])
}

/// `all_rules` plus the opt-in double-angle table, for
/// `trig_aware_simplify`.
pub fn all_rules_trig_aware() -> RewriteSystem {
    RewriteSystem::new(vec![
        Box::new(constant_fold::constant_folding()),
        Box::new(sub_div::sub_div_rules()),
        Box::new(addition::addition_rules()),
        Box::new(multiplication::multiplication_rules()),
        Box::new(exp_log::exp_log_rules()),
        Box::new(trig::trig_rules()),
        Box::new(trig::double_angle_rules()),
        Box::new(pythagorean::pythagorean_rules()),
        Box::new(hyperbolic::hyperbolic_rules()),
    ])
}

/// The "quick annihilators" `two_stage_simplify` descends with
/// top-down before its bottom-up term-collection ascent: the identity
/// and zero-product rules plus constant folding, deliberately excluding
/// anything that needs a full pattern table (so the descent pass stays
/// cheap).
pub fn quick_annihilators() -> RewriteSystem {
    RewriteSystem::new(vec![
        Box::new(constant_fold::constant_folding()),
        Box::new(quick_zero_one as fn(&Expr, &crate::context::Context) -> Expr),
    ])
}

fn quick_zero_one(expr: &Expr, ctx: &crate::context::Context) -> Expr {
    let after_add = addition::zero_one_identities().apply(expr, ctx);
    if after_add != *expr {
        return after_add;
    }
    multiplication::zero_one_identities().apply(expr, ctx)
}

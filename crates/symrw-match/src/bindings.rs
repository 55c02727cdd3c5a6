//! The binding map a successful match produces (`spec.md` §4.4).

use rustc_hash::FxHashMap;
use symrw_expr::Expr;

use crate::pattern::VarId;

/// Maps each `PatternVar` encountered during a match to the
/// sub-expression it captured.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    map: FxHashMap<VarId, Expr>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    pub fn get(&self, id: VarId) -> Option<&Expr> {
        self.map.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, &Expr)> {
        self.map.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Record `id ↦ expr`. If `id` is already bound, the caller (the
    /// matcher) is responsible for checking consistency first —
    /// inserting blindly would silently overwrite a conflicting earlier
    /// capture (`spec.md` §3 "Binding consistency").
    pub(crate) fn insert(&mut self, id: VarId, expr: Expr) {
        self.map.insert(id, expr);
    }
}

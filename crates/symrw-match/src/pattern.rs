//! Patterns: the shape a rule matches against, built from wildcards,
//! pattern variables, and literal leaves/nodes (`spec.md` §3, §4.4).

use symrw_common::TypeId;
use symrw_expr::{Constant, Fraction, Op, Symbol};

/// Identity of a `PatternVar`. A fresh `VarId` is minted once per
/// declared pattern variable, the same way [`Symbol::new`] mints a fresh
/// identity per declared symbol — two variables written with the same
/// display name are still distinct bindings.
pub type VarId = TypeId;

/// A pattern variable: matches anything and records the match under its
/// `VarId` in the binding map.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PatternVar {
    id: VarId,
    name: &'static str,
}

impl PatternVar {
    pub fn new(name: &'static str) -> Self {
        PatternVar {
            id: VarId::fresh(),
            name,
        }
    }

    pub fn id(&self) -> VarId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The shape a `Rewrite` matches against.
///
/// Mirrors `spec.md` §3's pattern sentinels: `AnyArg`, `AnyExpr`,
/// `AnyConstant`, `AnySymbol`, `PatternVar<id>`, and `Never`. Literal
/// `Symbol`/`Constant`/`Fraction`/`Node` variants realize the "identical
/// types match" priority (§4.4 rule 2) for patterns that pin down an
/// exact leaf or operator rather than wildcarding it.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches any expression of any kind.
    AnyArg,
    /// Matches any compound expression (any operator, any arity).
    AnyExpr,
    /// Matches any `Constant` or `Fraction`.
    AnyConstant,
    /// Matches any `Symbol`.
    AnySymbol,
    /// Matches anything, binding it to `VarId`.
    Var(PatternVar),
    /// Matches exactly this symbol (by identity).
    Symbol(Symbol),
    /// Matches exactly this constant value.
    Constant(Constant),
    /// Matches exactly this fraction value (or the `Constant` it's
    /// numerically equal to, per §4.4 rule 4).
    Fraction(Fraction),
    /// Matches `Expression<op, args>` iff the operator tag is identical
    /// and every sub-pattern matches the corresponding argument.
    Node(Op, Vec<Pattern>),
    /// Never matches anything, on either side (§4.4 rule 1). Used only
    /// inside patterns, never as a live `Expr`.
    Never,
}

impl Pattern {
    pub fn var(name: &'static str) -> (Self, PatternVar) {
        let v = PatternVar::new(name);
        (Pattern::Var(v), v)
    }

    pub fn node(op: Op, args: Vec<Pattern>) -> Self {
        Pattern::Node(op, args)
    }
}

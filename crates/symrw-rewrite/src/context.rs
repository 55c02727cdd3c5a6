//! The context aggregate a strategy reads while rewriting (`spec.md`
//! §4.6, §6 "Configuration (enumerated)").
//!
//! Mirrors the teacher's `InferCtx` builder: a plain struct with
//! explicit fields and `enter_*`/`exit_*` methods, rather than a
//! type-level tag set — strategies read tags but never mutate the
//! context they were handed; `enter_*` returns a new `Context` for the
//! callee to pass down.

use rustc_hash::FxHashSet;

/// A mode flag a strategy can check before applying itself. Corresponds
/// to the source's `InsideTrigTag` / `ConstantFoldingEnabledTag` /
/// `SymbolicModeTag` family of compile-time tag types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    InsideTrig,
    ConstantFoldingEnabled,
    SymbolicMode,
    NumericMode,
}

/// Recursion-depth and tag-set bundle threaded through a rewrite.
///
/// `depth` and `max_depth` implement the depth guard from `spec.md` §5:
/// a traversal that would recurse past `max_depth` stops and returns its
/// input unchanged instead of erroring.
#[derive(Clone, Debug)]
pub struct Context {
    depth: u32,
    max_depth: u32,
    tags: FxHashSet<Tag>,
}

/// Default depth guard (`spec.md` §5).
pub const DEFAULT_MAX_DEPTH: u32 = 20;

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

impl Context {
    /// `default_context()` (`spec.md` §6): depth 0, constant folding
    /// enabled, no other mode tags.
    pub fn new() -> Self {
        let mut tags = FxHashSet::default();
        tags.insert(Tag::ConstantFoldingEnabled);
        Context {
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            tags,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn without_tag(mut self, tag: Tag) -> Self {
        self.tags.remove(&tag);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Whether the depth guard has been reached; a traversal that sees
    /// `true` must stop and return its input unchanged.
    pub fn at_depth_limit(&self) -> bool {
        self.depth >= self.max_depth
    }

    /// Descend one level -- returns a new `Context` for the recursive
    /// call, leaving `self` untouched (strategies never mutate the
    /// context they were handed).
    pub fn enter(&self) -> Context {
        Context {
            depth: self.depth + 1,
            max_depth: self.max_depth,
            tags: self.tags.clone(),
        }
    }
}

/// `default_context()` (`spec.md` §6): depth 0, constant folding
/// enabled, no other mode tags.
pub fn default_context() -> Context {
    Context::new()
}

/// `numeric_context()` (`spec.md` §6): constant folding enabled,
/// `NumericMode` tag set, used by callers that only care about a final
/// numeric value and want every constant subexpression folded eagerly.
pub fn numeric_context() -> Context {
    Context::new().with_tag(Tag::NumericMode)
}

/// `symbolic_context()` (`spec.md` §6): constant folding disabled,
/// `SymbolicMode` tag set, for callers who want expressions kept in
/// exact symbolic form rather than eagerly folded to numbers.
pub fn symbolic_context() -> Context {
    Context::new()
        .without_tag(Tag::ConstantFoldingEnabled)
        .with_tag(Tag::SymbolicMode)
}

//! The expression tree itself: [`Expr`], its classification predicates,
//! accessors, and constructors.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::rc::Rc;

use crate::number::{reduce_division, Constant, Fraction, Reduced};
use crate::op::Op;
use crate::symbol::Symbol;

/// A symbolic expression.
///
/// `spec.md` §3 distinguishes four entity kinds (`Symbol`, `Constant`,
/// `Fraction`, `Expression<Op, Args...>`); this enum realizes exactly
/// those four as runtime values. Node arguments are `Rc<Expr>` rather
/// than `Box<Expr>` or bare `Expr` so that rewriting — which constantly
/// rebuilds parents around a changed child — can share untouched
/// siblings instead of deep-cloning them, which is the closest runtime
/// analogue to the source's claim that expressions are "copyable ...
/// lifetime-free" values.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Symbol(Symbol),
    Constant(Constant),
    Fraction(Fraction),
    Node(Op, Vec<Rc<Expr>>),
}

impl Expr {
    pub fn symbol(s: Symbol) -> Self {
        Expr::Symbol(s)
    }

    pub fn constant(v: impl Into<Constant>) -> Self {
        Expr::Constant(v.into())
    }

    /// Build `Fraction<num, den>`, folding to a `Constant` when the
    /// fraction reduces to a whole number (`spec.md` §3 invariant).
    ///
    /// Panics if `den` is zero, matching [`Fraction::new`].
    pub fn fraction(num: i64, den: i64) -> Self {
        match reduce_division(num, den).expect("fraction with zero denominator") {
            Reduced::Whole(n) => Expr::Constant(Constant::Int(n)),
            Reduced::Fraction(f) => Expr::Fraction(f),
        }
    }

    pub fn pi() -> Self {
        Expr::Node(Op::Pi, vec![])
    }

    pub fn e() -> Self {
        Expr::Node(Op::E, vec![])
    }

    /// Construct `Expression<Op, args>`. Panics if `args.len()` doesn't
    /// match the operator's declared arity, *except* for `Add`/`Mul`
    /// which are allowed any arity ≥ 0 because the rewriting layer
    /// flattens and re-collects their operands (`uses_canonical_form`).
    pub fn node(op: Op, args: Vec<Expr>) -> Self {
        if !op.uses_canonical_form() {
            assert_eq!(
                args.len(),
                op.arity(),
                "operator {op:?} built with {} args, expected {}",
                args.len(),
                op.arity()
            );
        }
        Expr::Node(op, args.into_iter().map(Rc::new).collect())
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Expr::Symbol(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Expr::Constant(_) | Expr::Fraction(_))
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, Expr::Node(..))
    }

    pub fn is_fraction(&self) -> bool {
        matches!(self, Expr::Fraction(_))
    }

    /// The operator tag, if this is a compound expression.
    pub fn op(&self) -> Option<Op> {
        match self {
            Expr::Node(op, _) => Some(*op),
            _ => None,
        }
    }

    pub fn args(&self) -> &[Rc<Expr>] {
        match self {
            Expr::Node(_, args) => args,
            _ => &[],
        }
    }

    /// `arg(k)` from `spec.md` §4.2. Returns `None` rather than the
    /// source's `Never` sentinel — see `SPEC_FULL.md` §4 for why that's
    /// the idiomatic substitute here.
    pub fn arg(&self, k: usize) -> Option<&Expr> {
        self.args().get(k).map(|r| r.as_ref())
    }

    /// Accessor for unary expressions.
    pub fn operand(&self) -> Option<&Expr> {
        self.arg(0)
    }

    pub fn left(&self) -> Option<&Expr> {
        self.arg(0)
    }

    pub fn right(&self) -> Option<&Expr> {
        self.arg(1)
    }

    /// Number of nodes in this tree, used by the addition/multiplication
    /// factoring rules' "only when it shortens the expression" guard
    /// (`spec.md` §4.7).
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Node(_, args) => 1 + args.iter().map(|a| a.node_count()).sum::<usize>(),
            _ => 1,
        }
    }
}

// ---- Construction sugar ----

/// Extension trait giving integers/floats the same ergonomics as the
/// source's `_c`/`_frac` user-defined literal suffixes (`spec.md` §6),
/// the closest idiomatic Rust equivalent since Rust has no general
/// user-defined numeric literal suffix mechanism.
pub trait IntoExprLiteral {
    fn c(self) -> Expr;
}

impl IntoExprLiteral for i64 {
    fn c(self) -> Expr {
        Expr::Constant(Constant::Int(self))
    }
}

impl IntoExprLiteral for f64 {
    fn c(self) -> Expr {
        Expr::Constant(Constant::Float(self))
    }
}

/// `n.frac(d)` mirrors the source's `n_frac` suffix for `Fraction<n, 1>`
/// literals, generalized to take the denominator directly.
pub trait FracLiteral {
    fn frac(self, den: i64) -> Expr;
}

impl FracLiteral for i64 {
    fn frac(self, den: i64) -> Expr {
        Expr::fraction(self, den)
    }
}

macro_rules! bin_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait for Expr {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                Expr::node($op, vec![self, rhs])
            }
        }
        impl $trait for &Expr {
            type Output = Expr;
            fn $method(self, rhs: &Expr) -> Expr {
                Expr::node($op, vec![self.clone(), rhs.clone()])
            }
        }
    };
}

// Subtraction/division are built as literal Sub/Div nodes; the rewrite
// rule layer normalizes them to addition-of-negation and
// multiplication-by-reciprocal (`spec.md` §4.7 "Subtraction and
// division").
bin_op!(Add, add, Op::Add);
bin_op!(Sub, sub, Op::Sub);
bin_op!(Mul, mul, Op::Mul);
bin_op!(Div, div, Op::Div);
bin_op!(Rem, rem, Op::Mod);

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::node(Op::Neg, vec![self])
    }
}
impl Neg for &Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::node(Op::Neg, vec![self.clone()])
    }
}

impl Expr {
    /// `x.pow(y)`. Not an operator overload (`spec.md` uses `^`, which
    /// Rust reserves for bitwise xor and would read misleadingly as a
    /// math power); the method form is the idiomatic choice most
    /// symbolic-math crates in this ecosystem make.
    pub fn pow(&self, exp: impl Into<Expr>) -> Expr {
        Expr::node(Op::Pow, vec![self.clone(), exp.into()])
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Constant(Constant::Int(n))
    }
}
impl From<f64> for Expr {
    fn from(v: f64) -> Self {
        Expr::Constant(Constant::Float(v))
    }
}
impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Expr::Symbol(s)
    }
}

macro_rules! unary_fn {
    ($name:ident, $op:expr) => {
        pub fn $name(x: impl Into<Expr>) -> Expr {
            Expr::node($op, vec![x.into()])
        }
    };
}

unary_fn!(sin, Op::Sin);
unary_fn!(cos, Op::Cos);
unary_fn!(tan, Op::Tan);
unary_fn!(asin, Op::Asin);
unary_fn!(acos, Op::Acos);
unary_fn!(atan, Op::Atan);
unary_fn!(sinh, Op::Sinh);
unary_fn!(cosh, Op::Cosh);
unary_fn!(tanh, Op::Tanh);
unary_fn!(exp, Op::Exp);
unary_fn!(log, Op::Log);
unary_fn!(sqrt, Op::Sqrt);

pub fn atan2(y: impl Into<Expr>, x: impl Into<Expr>) -> Expr {
    Expr::node(Op::Atan2, vec![y.into(), x.into()])
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::display::write_expr(f, self, Op::Add.precedence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_sugar_round_trips() {
        let x = Symbol::new("x");
        let e = Expr::from(x) + 2i64.c();
        assert!(e.is_expression());
        assert_eq!(e.op(), Some(Op::Add));
        assert_eq!(e.left().unwrap(), &Expr::from(x));
        assert_eq!(e.right().unwrap(), &Expr::Constant(Constant::Int(2)));
    }

    #[test]
    fn fraction_construction_folds_whole_numbers() {
        assert_eq!(Expr::fraction(6, 2), Expr::Constant(Constant::Int(3)));
        assert_eq!(
            Expr::fraction(2, 4),
            Expr::Fraction(Fraction::new(1, 2).unwrap())
        );
    }

    #[test]
    fn node_count_counts_all_nodes() {
        let x = Symbol::new("x");
        let e = (Expr::from(x) + 1i64.c()) * 2i64.c();
        assert_eq!(e.node_count(), 5); // Mul, Add, x, 1, 2
    }

    #[test]
    #[should_panic(expected = "expected 1")]
    fn node_arity_mismatch_panics() {
        let x = Symbol::new("x");
        Expr::node(Op::Neg, vec![Expr::from(x), Expr::from(x)]);
    }
}

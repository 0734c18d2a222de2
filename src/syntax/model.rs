//! The classification contract the unifier is written against.

use super::{Atomic, Term, Var};

/// How an atomic value is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Equal iff the same object.
    Identity,
    /// Equal iff deeply equal by representation.
    Structural,
}

/// What a value looks like to the unifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Variable(Var),
    Atomic(Category),
    Compound { tag: u8, arity: usize },
}

/// Capabilities a value model supplies so its values can be unified.
///
/// Classification must be total and stable: the same value always gets the
/// same shape. The unifier only calls `field` on values classified as
/// compounds, `physically_equal` on pairs of identity-compared atomics and
/// `structurally_equal` on other non-variable, non-compound pairs.
pub trait TermModel: Clone {
    fn classify(&self) -> Shape;

    /// Field `index` of a compound, `None` when out of range or not a
    /// compound.
    fn field(&self, index: usize) -> Option<&Self>;

    fn physically_equal(&self, other: &Self) -> bool;

    fn structurally_equal(&self, other: &Self) -> bool;
}

impl TermModel for Term {
    fn classify(&self) -> Shape {
        match self {
            Term::Var(v) => Shape::Variable(*v),
            Term::Atom(a) => Shape::Atomic(a.category()),
            Term::Compound(tag, fields) => Shape::Compound {
                tag: *tag,
                arity: fields.len(),
            },
        }
    }

    fn field(&self, index: usize) -> Option<&Self> {
        match self {
            Term::Compound(_, fields) => fields.get(index),
            _ => None,
        }
    }

    fn physically_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Atom(Atomic::Function(f)), Term::Atom(Atomic::Function(g))) => f.ptr_eq(g),
            _ => false,
        }
    }

    fn structurally_equal(&self, other: &Self) -> bool {
        Term::structurally_equal(self, other)
    }
}

//! Terms: variables, atomic values and tagged compounds.

use std::collections::BTreeSet;
use std::fmt;

use super::{Atomic, Function, Var};
use crate::error::{Result, UnifyError};
use crate::printer;

/// A term that may contain logic variables.
///
/// Compounds model constructed data: tuples and records are tag 0, variant
/// constructors carry their constructor index as tag, and lists are nested
/// tag-0 pairs ending in the constant 0 (see [`Term::list`]). Constant
/// constructors (nullary variants, the empty list) are plain integers.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Var(Var),
    Atom(Atomic),
    /// A tag and its fields.
    Compound(u8, Vec<Term>),
}

impl Term {
    pub fn var(var: Var) -> Self {
        Term::Var(var)
    }

    pub fn int(n: i64) -> Self {
        Term::Atom(Atomic::Int(n))
    }

    pub fn char(c: char) -> Self {
        Term::Atom(Atomic::Char(c))
    }

    pub fn bool(b: bool) -> Self {
        Term::Atom(Atomic::Bool(b))
    }

    pub fn unit() -> Self {
        Term::Atom(Atomic::Unit)
    }

    pub fn float(x: f64) -> Self {
        Term::Atom(Atomic::Float(x))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Term::Atom(Atomic::Str(s.into()))
    }

    pub fn float_array(xs: Vec<f64>) -> Self {
        Term::Atom(Atomic::FloatArray(xs))
    }

    pub fn int64(n: i64) -> Self {
        Term::Atom(Atomic::Int64(n))
    }

    pub fn abstract_handle(handle: u64) -> Self {
        Term::Atom(Atomic::Abstract(handle))
    }

    pub fn lazy_value(inner: Term) -> Self {
        Term::Atom(Atomic::Lazy(Box::new(inner)))
    }

    pub fn object(oid: u64) -> Self {
        Term::Atom(Atomic::Object(oid))
    }

    pub fn function(f: Function) -> Self {
        Term::Atom(Atomic::Function(f))
    }

    pub fn compound(tag: u8, fields: Vec<Term>) -> Self {
        Term::Compound(tag, fields)
    }

    /// A tuple or record: tag 0.
    pub fn tuple(fields: Vec<Term>) -> Self {
        Term::Compound(0, fields)
    }

    /// A constant constructor, represented by its index.
    pub fn constant(index: i64) -> Self {
        Term::int(index)
    }

    /// The empty list.
    pub fn nil() -> Self {
        Term::constant(0)
    }

    pub fn cons(head: Term, tail: Term) -> Self {
        Term::Compound(0, vec![head, tail])
    }

    /// A proper list of `items`.
    pub fn list(items: Vec<Term>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Term::nil(), |tail, head| Term::cons(head, tail))
    }

    pub fn none() -> Self {
        Term::constant(0)
    }

    pub fn some(value: Term) -> Self {
        Term::Compound(0, vec![value])
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    /// The id of a variable term.
    pub fn variable_id(&self) -> Result<u64> {
        self.as_var().map(|v| v.id()).ok_or(UnifyError::NotAVariable)
    }

    /// Tag of a compound, `None` otherwise.
    pub fn tag(&self) -> Option<u8> {
        match self {
            Term::Compound(tag, _) => Some(*tag),
            _ => None,
        }
    }

    /// Fields of a compound; empty for everything else.
    pub fn fields(&self) -> &[Term] {
        match self {
            Term::Compound(_, fields) => fields,
            _ => &[],
        }
    }

    /// Collect the variables occurring in substitutable positions, ordered by id.
    ///
    /// Variables hidden inside atomic values (a lazy value's contents) are not
    /// reachable by unification and are not reported.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut set = BTreeSet::new();
        self.collect_variables(&mut set);
        set
    }

    fn collect_variables(&self, set: &mut BTreeSet<Var>) {
        match self {
            Term::Var(v) => {
                set.insert(*v);
            }
            Term::Atom(_) => {}
            Term::Compound(_, fields) => {
                for field in fields {
                    field.collect_variables(set);
                }
            }
        }
    }

    /// Check if this term contains no variables (is ground).
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::Atom(_) => true,
            Term::Compound(_, fields) => fields.iter().all(|f| f.is_ground()),
        }
    }

    /// Check if a variable occurs in this term.
    pub fn occurs(&self, var: &Var) -> bool {
        match self {
            Term::Var(v) => v == var,
            Term::Atom(_) => false,
            Term::Compound(_, fields) => fields.iter().any(|f| f.occurs(var)),
        }
    }

    /// Deep equality by representation: variables by id, atomics by
    /// [`Atomic::structurally_equal`], compounds by tag and fields.
    pub fn structurally_equal(&self, other: &Term) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Atom(a), Term::Atom(b)) => a.structurally_equal(b),
            (Term::Compound(ta, fa), Term::Compound(tb, fb)) => {
                ta == tb
                    && fa.len() == fb.len()
                    && fa.iter().zip(fb).all(|(a, b)| a.structurally_equal(b))
            }
            _ => false,
        }
    }
}

impl From<Var> for Term {
    fn from(var: Var) -> Self {
        Term::Var(var)
    }
}

impl From<Atomic> for Term {
    fn from(atom: Atomic) -> Self {
        Term::Atom(atom)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&printer::Show(self), f)
    }
}

/// True iff `term` is a variable.
pub fn is_variable(term: &Term) -> bool {
    term.is_variable()
}

/// The id of `term`, failing with `NotAVariable` for anything else.
pub fn variable_id(term: &Term) -> Result<u64> {
    term.variable_id()
}

/// `Some(id(a) - id(b))` when both are variables.
pub fn compare_variables(a: &Term, b: &Term) -> Option<i64> {
    match (a, b) {
        (Term::Var(a), Term::Var(b)) => Some((a.id() as i64).wrapping_sub(b.id() as i64)),
        _ => None,
    }
}

//! Atomic values: everything a term can hold that has no substitutable structure.

use std::fmt;
use std::sync::Arc;

use super::{Category, Term};

type Callable = dyn Fn(&[Term]) -> Term + Send + Sync;

/// A function value.
///
/// Functions are compared by identity only. Cloning a `Function` shares the
/// underlying closure, so clones are equal; wrapping the same code twice
/// produces two distinct functions.
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Term]) -> Term + Send + Sync + 'static,
    {
        Function(Arc::new(f))
    }

    pub fn call(&self, args: &[Term]) -> Term {
        (self.0)(args)
    }

    /// True iff both handles point at the same closure.
    pub fn ptr_eq(&self, other: &Function) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0).cast::<()>(),
            Arc::as_ptr(&other.0).cast::<()>(),
        )
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// An atomic value.
///
/// `Int`, `Char`, `Bool` and `Unit` are immediates: they share a single
/// integer representation (see [`Atomic::immediate`]) and are compared by it.
/// Derived `PartialEq` is syntactic; unification uses
/// [`Atomic::structurally_equal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Atomic {
    Int(i64),
    Char(char),
    Bool(bool),
    Unit,
    Float(f64),
    Str(String),
    FloatArray(Vec<f64>),
    /// Boxed fixed-size integer.
    Int64(i64),
    /// Opaque handle owned by the embedding system.
    Abstract(u64),
    /// A suspended value. Its contents are never unified into.
    Lazy(Box<Term>),
    /// An object, identified by its object id.
    Object(u64),
    Function(Function),
}

impl Atomic {
    pub fn category(&self) -> Category {
        match self {
            Atomic::Function(_) => Category::Identity,
            _ => Category::Structural,
        }
    }

    /// The integer representation of an immediate value, `None` for
    /// everything stored out of line.
    pub fn immediate(&self) -> Option<i64> {
        match self {
            Atomic::Int(n) => Some(*n),
            Atomic::Char(c) => Some(i64::from(u32::from(*c))),
            Atomic::Bool(b) => Some(i64::from(*b)),
            Atomic::Unit => Some(0),
            _ => None,
        }
    }

    /// Deep equality by representation.
    ///
    /// Immediates are equal when their integer representations are, whatever
    /// their variant. Boxed values are equal only to the same variant with an
    /// equal payload.
    pub fn structurally_equal(&self, other: &Atomic) -> bool {
        if let (Some(a), Some(b)) = (self.immediate(), other.immediate()) {
            return a == b;
        }
        match (self, other) {
            (Atomic::Float(a), Atomic::Float(b)) => a == b,
            (Atomic::Str(a), Atomic::Str(b)) => a == b,
            (Atomic::FloatArray(a), Atomic::FloatArray(b)) => a == b,
            (Atomic::Int64(a), Atomic::Int64(b)) => a == b,
            (Atomic::Abstract(a), Atomic::Abstract(b)) => a == b,
            (Atomic::Object(a), Atomic::Object(b)) => a == b,
            (Atomic::Lazy(a), Atomic::Lazy(b)) => a.structurally_equal(b),
            (Atomic::Function(a), Atomic::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

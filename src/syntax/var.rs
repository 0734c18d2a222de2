//! Logic variables and the registry that issues them.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Term;

/// A logic variable.
///
/// A variable is nothing but its id: two variables are the same iff their ids
/// are equal. Ids are handed out by a [`VarRegistry`] and never reused by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    id: u64,
}

impl Var {
    pub(crate) fn from_id(id: u64) -> Self {
        Var { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<v{}>", self.id)
    }
}

/// Issues variables with strictly increasing ids, starting at 0.
///
/// The counter is atomic, so one registry can be shared between threads.
/// Most callers use the process-wide registry through [`fresh`]; code that
/// needs reproducible ids (tests, printers checked against fixed output)
/// owns its own registry instead.
#[derive(Debug, Default)]
pub struct VarRegistry {
    next: AtomicU64,
}

impl VarRegistry {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// A registry whose first variable gets id `id`.
    pub const fn starting_at(id: u64) -> Self {
        VarRegistry {
            next: AtomicU64::new(id),
        }
    }

    pub fn fresh_var(&self) -> Var {
        Var::from_id(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// A fresh variable, already wrapped as a term.
    pub fn fresh(&self) -> Term {
        Term::Var(self.fresh_var())
    }

    /// The id the next call to [`VarRegistry::fresh_var`] will hand out.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    /// Rewind the counter to 0. Variables issued before the reset keep their
    /// ids, so mixing them with new ones can alias.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}

static GLOBAL_REGISTRY: VarRegistry = VarRegistry::new();

/// A fresh variable from the process-wide registry.
pub fn fresh() -> Term {
    GLOBAL_REGISTRY.fresh()
}

/// Rewind the process-wide registry to 0.
pub fn reset_registry() {
    GLOBAL_REGISTRY.reset();
}

//! Unification: substitutions, walking, and the unifier itself.

mod substitution;
mod unify;

pub use substitution::{Iter, Substitution};
pub use unify::{unify, unify_many, unify_with, Unifier, UnifyConfig};

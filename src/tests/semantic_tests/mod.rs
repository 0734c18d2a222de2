//! Semantic tests for the unifier.
//!
//! These check the properties the equality policy promises, not just surface
//! behaviour: how variables bind, which category of atomic value is compared
//! how, how compound shapes are matched, and which error each mismatch
//! reports.
//!
//! # References
//!
//! - Robinson, J.A. "A Machine-Oriented Logic Based on the Resolution
//!   Principle." J. ACM 12(1), 23–41 (1965).
//! - Friedman, D.P., Byrd, W.E., Kiselyov, O. "The Reasoned Schemer." MIT
//!   Press (2005), for walk and substitution-as-list.
//!
use crate::error::UnifyError;
use crate::syntax::{Function, Term, Var, VarRegistry};
use crate::unify::{unify, unify_many, unify_with, Substitution, Unifier, UnifyConfig};

/// Helper to take `n` fresh variables from a private registry.
fn vars(n: usize) -> (VarRegistry, Vec<Term>) {
    let registry = VarRegistry::new();
    let terms = (0..n).map(|_| registry.fresh()).collect();
    (registry, terms)
}

/// Helper to extract the variable behind a term known to be one.
fn var_of(term: &Term) -> Var {
    term.as_var().expect("variable term")
}

mod printer_semantics;
mod proptests;

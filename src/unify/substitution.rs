//! Substitution: an ordered list of variable bindings.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::printer;
use crate::syntax::{Shape, Term, TermModel, Var};

struct Binding<T> {
    var: Var,
    term: T,
    next: Link<T>,
}

type Link<T> = Option<Arc<Binding<T>>>;

/// A substitution σ = [X₁ → t₁, ..., Xₙ → tₙ], most recent binding first.
///
/// Bindings are never removed. Binding a variable that is already bound
/// shadows the older entry: lookups stop at the most recent match, so exactly
/// one binding per variable is active. The list is persistent, and
/// [`Substitution::extend`] shares the existing bindings instead of copying
/// them; a substitution handed out to a caller never changes afterwards.
pub struct Substitution<T = Term> {
    head: Link<T>,
    len: usize,
}

impl<T> Substitution<T> {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution { head: None, len: 0 }
    }

    /// Create a substitution with a single binding.
    pub fn singleton(var: Var, term: T) -> Self {
        Substitution::empty().extend(var, term)
    }

    /// A new substitution with `var → term` in front of `self`'s bindings.
    pub fn extend(&self, var: Var, term: T) -> Self {
        Substitution {
            head: Some(Arc::new(Binding {
                var,
                term,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Add a binding to this substitution. Clones taken earlier keep their
    /// own view.
    pub fn bind(&mut self, var: Var, term: T) {
        *self = self.extend(var, term);
    }

    /// The active binding for `var`, if any.
    pub fn lookup(&self, var: &Var) -> Option<&T> {
        self.iter().find(|(v, _)| *v == var).map(|(_, t)| t)
    }

    /// Number of stored bindings, shadowed ones included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the bindings, most recent first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Get the domain of this substitution (variables that are bound).
    pub fn domain(&self) -> BTreeSet<Var> {
        self.iter().map(|(v, _)| *v).collect()
    }
}

impl<T: TermModel> Substitution<T> {
    /// Follow variable bindings from `term` until reaching a non-variable or
    /// an unbound variable.
    ///
    /// An acyclic chain takes at most one hop per stored binding. A caller can
    /// build a circular chain such as `X → X` or `X → Y, Y → X`; after
    /// `len()` hops the walk stops on whichever variable of the cycle it has
    /// reached and returns it.
    pub fn walk<'a>(&'a self, mut term: &'a T) -> &'a T {
        for _ in 0..self.len {
            let Shape::Variable(var) = term.classify() else {
                break;
            };
            match self.lookup(&var) {
                Some(bound) => term = bound,
                None => break,
            }
        }
        term
    }
}

impl Substitution<Term> {
    /// Apply this substitution throughout a term.
    ///
    /// Bound variables are replaced recursively. A variable reached again
    /// while its own binding is being expanded (a binding made without an
    /// occurs check) is left in place, so the result is finite.
    pub fn resolve(&self, term: &Term) -> Term {
        let mut expanding = Vec::new();
        self.resolve_inner(term, &mut expanding)
    }

    fn resolve_inner(&self, term: &Term, expanding: &mut Vec<Var>) -> Term {
        match term {
            Term::Var(var) => {
                if expanding.contains(var) {
                    return term.clone();
                }
                match self.lookup(var) {
                    Some(bound) => {
                        expanding.push(*var);
                        let resolved = self.resolve_inner(bound, expanding);
                        expanding.pop();
                        resolved
                    }
                    None => term.clone(),
                }
            }
            Term::Atom(_) => term.clone(),
            Term::Compound(tag, fields) => Term::Compound(
                *tag,
                fields
                    .iter()
                    .map(|f| self.resolve_inner(f, expanding))
                    .collect(),
            ),
        }
    }
}

impl<T> Clone for Substitution<T> {
    fn clone(&self) -> Self {
        Substitution {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Substitution<T> {
    fn default() -> Self {
        Substitution::empty()
    }
}

impl<T: PartialEq> PartialEq for Substitution<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Substitution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for Substitution<Term> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&printer::ShowSubst(self), f)
    }
}

// Unlink iteratively so dropping a long chain does not recurse once per binding.
impl<T> Drop for Substitution<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            match Arc::try_unwrap(node) {
                Ok(mut binding) => link = binding.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a substitution's bindings, most recent first.
pub struct Iter<'a, T> {
    next: Option<&'a Binding<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a Var, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|binding| {
            self.next = binding.next.as_deref();
            (&binding.var, &binding.term)
        })
    }
}

impl<'a, T> IntoIterator for &'a Substitution<T> {
    type Item = (&'a Var, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

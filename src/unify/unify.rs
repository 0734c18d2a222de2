//! Unification algorithm: first-order, no occurs check.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Substitution;
use crate::error::{Result, UnifyError};
use crate::syntax::{Category, Shape, TermModel};

/// Configuration for unification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnifyConfig {
    /// Deepest level of compound nesting to descend into (None for unlimited).
    /// The outermost pair is level 0.
    pub max_depth: Option<usize>,
}

impl UnifyConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// A unifier carrying its configuration.
///
/// The substitution is threaded through every step as a value, so a
/// `Unifier` holds no per-call state and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Unifier {
    config: UnifyConfig,
}

impl Unifier {
    pub fn new(config: UnifyConfig) -> Self {
        Unifier { config }
    }

    pub fn config(&self) -> &UnifyConfig {
        &self.config
    }

    /// Unify two terms starting from the empty substitution.
    pub fn unify<T: TermModel>(&self, u: &T, v: &T) -> Result<Substitution<T>> {
        self.unify_with(u, v, &Substitution::empty())
    }

    /// Unify two terms on top of existing bindings. `subst` itself is left
    /// untouched; the extended substitution is returned.
    pub fn unify_with<T: TermModel>(
        &self,
        u: &T,
        v: &T,
        subst: &Substitution<T>,
    ) -> Result<Substitution<T>> {
        let result = self.step(u, v, subst, 0);
        match &result {
            Ok(s) => debug!(bindings = s.len(), "unification succeeded"),
            Err(e) => debug!(error = %e, "unification failed"),
        }
        result
    }

    /// Unify each pair in order, threading one substitution through all of
    /// them.
    pub fn unify_many<T: TermModel>(&self, pairs: &[(T, T)]) -> Result<Substitution<T>> {
        let mut subst = Substitution::empty();
        for (u, v) in pairs {
            subst = self.unify_with(u, v, &subst)?;
        }
        Ok(subst)
    }

    fn step<T: TermModel>(
        &self,
        u: &T,
        v: &T,
        subst: &Substitution<T>,
        depth: usize,
    ) -> Result<Substitution<T>> {
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(UnifyError::DepthLimitExceeded { limit });
            }
        }

        let u = subst.walk(u);
        let v = subst.walk(v);

        match (u.classify(), v.classify()) {
            (Shape::Variable(a), Shape::Variable(b)) if a == b => Ok(subst.clone()),
            (Shape::Variable(a), _) => {
                trace!(var = a.id(), depth, "binding variable");
                Ok(subst.extend(a, v.clone()))
            }
            (_, Shape::Variable(b)) => {
                trace!(var = b.id(), depth, "binding variable");
                Ok(subst.extend(b, u.clone()))
            }
            (
                Shape::Compound {
                    tag: left_tag,
                    arity: left_arity,
                },
                Shape::Compound {
                    tag: right_tag,
                    arity: right_arity,
                },
            ) => {
                let mismatch = UnifyError::SizeOrTagMismatch {
                    left_tag,
                    left_arity,
                    right_tag,
                    right_arity,
                };
                if left_tag != right_tag || left_arity != right_arity {
                    return Err(mismatch);
                }
                trace!(tag = left_tag, arity = left_arity, depth, "unifying fields");
                let mut acc = subst.clone();
                for i in 0..left_arity {
                    let (Some(a), Some(b)) = (u.field(i), v.field(i)) else {
                        return Err(mismatch);
                    };
                    acc = self.step(a, b, &acc, depth + 1)?;
                }
                Ok(acc)
            }
            (Shape::Compound { .. }, Shape::Atomic(_)) | (Shape::Atomic(_), Shape::Compound { .. }) => {
                Err(UnifyError::NonAnalyticMismatch)
            }
            (Shape::Atomic(Category::Identity), Shape::Atomic(Category::Identity)) => {
                if u.physically_equal(v) {
                    Ok(subst.clone())
                } else {
                    Err(UnifyError::FunctionPhysicalInequality)
                }
            }
            (Shape::Atomic(_), Shape::Atomic(_)) => {
                if u.structurally_equal(v) {
                    Ok(subst.clone())
                } else {
                    Err(UnifyError::NonAnalyticMismatch)
                }
            }
        }
    }
}

/// Unify two terms with the default configuration.
pub fn unify<T: TermModel>(u: &T, v: &T) -> Result<Substitution<T>> {
    Unifier::default().unify(u, v)
}

/// Unify two terms on top of existing bindings with the default configuration.
pub fn unify_with<T: TermModel>(u: &T, v: &T, subst: &Substitution<T>) -> Result<Substitution<T>> {
    Unifier::default().unify_with(u, v, subst)
}

/// Simultaneous unification of multiple term pairs.
pub fn unify_many<T: TermModel>(pairs: &[(T, T)]) -> Result<Substitution<T>> {
    Unifier::default().unify_many(pairs)
}

//! unifylog: first-order unification over tagged values
//!
//! Terms are variables, atomic values or tagged compounds. [`unify`] finds
//! the bindings that make two terms equal, or reports why none exist:
//!
//! ```
//! use unifylog::{show, shows, unify, Term, VarRegistry};
//!
//! let vars = VarRegistry::new();
//! let tail = vars.fresh();
//! let pair = Term::tuple(vec![Term::int(1), tail.clone()]);
//! let list = Term::list(vec![Term::int(1), Term::int(2), Term::int(3)]);
//!
//! let subst = unify(&pair, &list).unwrap();
//! assert_eq!(show(subst.walk(&tail)), "C0((2)(C0((3)(0))))");
//! assert_eq!(shows(&subst), "<v0> / C0((2)(C0((3)(0))))");
//! ```
//!
//! There is no occurs check: a variable may be bound to a compound that
//! contains it.

pub mod error;
pub mod printer;
pub mod syntax;
pub mod unify;

pub use error::{Result, UnifyError};
pub use printer::{show, shows};
pub use syntax::{
    compare_variables, fresh, is_variable, reset_registry, variable_id, Atomic, Category,
    Function, Shape, Term, TermModel, Var, VarRegistry,
};
pub use unify::{unify, unify_many, unify_with, Substitution, Unifier, UnifyConfig};

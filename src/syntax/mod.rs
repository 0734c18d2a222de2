//! The value model: variables, atomic values, compound terms, and the
//! classification contract the unifier consumes.

mod atomic;
mod model;
mod term;
mod var;

pub use atomic::{Atomic, Function};
pub use model::{Category, Shape, TermModel};
pub use term::{compare_variables, is_variable, variable_id, Term};
pub use var::{fresh, reset_registry, Var, VarRegistry};

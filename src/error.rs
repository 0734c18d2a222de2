//! Error taxonomy for unification and term inspection.

use thiserror::Error;

/// Reasons a unification call or a term query can fail.
///
/// Every kind is a hard failure of the call that raised it: the unifier
/// aborts at the first one and discards any bindings made so far.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    /// Two compounds differ in tag or in number of fields.
    #[error(
        "compound shape mismatch: C{left_tag}/{left_arity} against C{right_tag}/{right_arity}"
    )]
    SizeOrTagMismatch {
        left_tag: u8,
        left_arity: usize,
        right_tag: u8,
        right_arity: usize,
    },
    /// Two function values are not the same object.
    #[error("function values are not physically equal")]
    FunctionPhysicalInequality,
    /// Two non-variable terms failed their structural equality test, or a
    /// compound met an atomic value.
    #[error("values are not structurally equal")]
    NonAnalyticMismatch,
    /// A variable id was requested for a term that is not a variable.
    #[error("term is not a variable")]
    NotAVariable,
    /// The configured recursion limit was reached.
    #[error("unification exceeded the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, UnifyError>;

//! Errors produced by the reduction runtime.

use crate::ops::Op;

/// Error evaluating a reduction or container access.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EvalError {
    /// Reduction was given an empty list.
    #[display("cannot reduce an empty list")]
    EmptyInput,

    /// The operator is not defined for the operand types.
    #[display("{op} is not defined for {lhs} and {rhs}")]
    TypeMismatch {
        /// The operator applied.
        op: Op,
        /// Type name of the left operand.
        lhs: &'static str,
        /// Type name of the right operand.
        rhs: &'static str,
    },

    /// Division or modulo by zero.
    #[display("division by zero")]
    DivisionByZero,

    /// List index outside the valid range.
    #[display("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// The requested index (may be negative).
        index: i64,
        /// Length of the list.
        len: usize,
    },

    /// Map lookup for a key that is not present.
    #[display("no such key: {_0:?}")]
    KeyNotFound(String),

    /// Indexed access into a value that is not a container.
    #[display("cannot index into {_0}")]
    NotIndexable(&'static str),

    /// The key type does not match the container.
    #[display("cannot index {container} with {key}")]
    BadKey {
        /// Type name of the container.
        container: &'static str,
        /// Type name of the key.
        key: &'static str,
    },
}

impl std::error::Error for EvalError {}

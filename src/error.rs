//! Error types shared by all value types.

use thiserror::Error;

/// Result type alias using the crate's [Error].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or combining sets, vectors and matrices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input, a bad scalar or an operation that is undefined for the operand.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// The operand is not the kind of entity the operation expects.
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// The expected entity
        expected: &'static str,
        /// The entity that was supplied
        got: &'static str,
    },

    /// The shapes of the operands are not compatible.
    #[error("Dimension mismatch in '{op}': {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Shape of the left operand
        lhs: Vec<usize>,
        /// Shape of the right operand
        rhs: Vec<usize>,
    },

    /// Row, column or element index outside of the valid range.
    #[error("Index {index} out of range for dimension of size {size}")]
    IndexOutOfRange {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: &'static str, got: &'static str) -> Self {
        Self::TypeMismatch { expected, got }
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(op: &'static str, lhs: &[usize], rhs: &[usize]) -> Self {
        Self::DimensionMismatch {
            op,
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create an out of range error, returned when `index >= size`.
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    pub(crate) fn not_square(op: &'static str) -> Self {
        Self::invalid_argument(op, "matrix must be square")
    }

    pub(crate) fn not_a_number(arg: &'static str) -> Self {
        Self::invalid_argument(arg, "value must be a number")
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(
            Error::invalid_argument("rows", "value must be a non-empty array").to_string(),
            "Invalid argument 'rows': value must be a non-empty array"
        );
        assert_eq!(
            Error::dimension_mismatch("plus", &[2, 2], &[2, 3]).to_string(),
            "Dimension mismatch in 'plus': [2, 2] vs [2, 3]"
        );
        assert_eq!(
            Error::index_out_of_range(4, 2).to_string(),
            "Index 4 out of range for dimension of size 2"
        );
        assert_eq!(
            Error::type_mismatch("matrix", "vector").to_string(),
            "Type mismatch: expected matrix, got vector"
        );
    }
}

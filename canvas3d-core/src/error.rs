/// Errors raised by matrix construction and arithmetic
use std::fmt;

use thiserror::Error;

/// `height x width` of an operand, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Precondition violations of the matrix engine.
///
/// All of these indicate a programming error at the call site (bad shape,
/// overfilled build phase, incompatible operands). None of them is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Invalid matrix shape: {height}x{width}")]
    InvalidShape { height: usize, width: usize },

    #[error("Invalid row length: expected {expected}, found {found}")]
    InvalidRowLength { expected: usize, found: usize },

    #[error("Matrix already full ({height} rows)")]
    MatrixFull { height: usize },

    #[error("Invalid {op} matrix size: {left} and {right}")]
    ShapeMismatch {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    #[error("Invalid {op} operand: matrix width is {found_width}, expected {expected_width}")]
    InvalidOperandShape {
        op: &'static str,
        expected_width: usize,
        found_width: usize,
    },

    #[error("Failed to parse matrix: {0}")]
    Parse(String),
}

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

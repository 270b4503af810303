use num_complex::Complex64;
use thiserror::Error;

/// Failures of construction, parsing and arithmetic on Pauli values.
///
/// Every fallible operation either returns a fully formed value or one of these; there are no
/// partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PauliError {
    #[error("phase {phase} is not a fourth root of unity")]
    InvalidPhase { phase: Complex64 },
    #[error("mismatched tensor dimensions: {left}, {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("unsupported operands for {operation}: {left} and {right}")]
    UnsupportedOperand {
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("label '{0}' is outside the alphabet 'IXYZ'")]
    InvalidLabel(char),
    #[error("a tensor needs at least one factor")]
    EmptyTensor,
    #[error("failed to parse '{0}'")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PauliError>;

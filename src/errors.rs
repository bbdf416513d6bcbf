use std::fmt;

/// Errors reported by continued fraction and coprime sequence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContFracError {
    /// A rational number was given a zero denominator.
    DivisionByZero,
    /// An element sequence is empty or has a non-positive element after the first.
    InvalidElements,
    /// A convergent or remainder index lies outside `0..=order`.
    IndexOutOfRange { index: usize, order: usize },
    /// An argument violates a documented precondition.
    InvalidArgument(&'static str),
}

impl fmt::Display for ContFracError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContFracError::DivisionByZero => write!(f, "denominator is zero"),
            ContFracError::InvalidElements => {
                write!(f, "element sequence is empty or has a non-positive tail element")
            }
            ContFracError::IndexOutOfRange { index, order } => {
                write!(f, "index {} out of range for an expansion of order {}", index, order)
            }
            ContFracError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for ContFracError {}

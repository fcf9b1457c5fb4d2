#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// The postfix sequence does not reduce to exactly one value.
    InvalidExpression {
        /// What was wrong with the sequence.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { details } => write!(f, "invalid expression: {details}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}

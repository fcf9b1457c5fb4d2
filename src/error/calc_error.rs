use crate::error::{ParseError, RuntimeError};

/// Any failure of [`crate::calculate`].
///
/// Conversion failures and evaluation failures keep their own types so that
/// callers interested in details can match on them, while [`CalcError::kind`]
/// collapses both into the closed set of kinds a boundary layer maps to a
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The expression could not be converted to postfix order.
    Parse(ParseError),
    /// The postfix sequence could not be evaluated.
    Runtime(RuntimeError),
}

/// The externally visible kind of a calculation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character outside the expression alphabet.
    InvalidCharInExpression,
    /// Too few or too many operands.
    InvalidExpression,
    /// Division by zero.
    DivisionByZero,
    /// A `)` without a matching `(`.
    OpeningParenthesisMissing,
    /// A `(` that is never closed.
    ClosingParenthesisMissing,
    /// Anything the calculator itself never produces, such as a result that
    /// cannot be represented in the response.
    Unexpected,
}

impl ErrorKind {
    /// Returns the stable message for this kind.
    ///
    /// # Example
    /// ```
    /// use calcapi::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::DivisionByZero.as_str(), "division by zero");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCharInExpression => "invalid char in expression",
            Self::InvalidExpression => "invalid expression",
            Self::DivisionByZero => "division by zero",
            Self::OpeningParenthesisMissing => "opening parenthesis missing",
            Self::ClosingParenthesisMissing => "closing parenthesis missing",
            Self::Unexpected => "unknown error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CalcError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::InvalidChar { .. }) => ErrorKind::InvalidCharInExpression,
            Self::Parse(ParseError::OpeningParenthesisMissing { .. }) => {
                ErrorKind::OpeningParenthesisMissing
            },
            Self::Parse(ParseError::ClosingParenthesisMissing) => {
                ErrorKind::ClosingParenthesisMissing
            },
            Self::Runtime(RuntimeError::InvalidExpression { .. }) => ErrorKind::InvalidExpression,
            Self::Runtime(RuntimeError::DivisionByZero) => ErrorKind::DivisionByZero,
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

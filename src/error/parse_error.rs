#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting an infix expression
/// to postfix order.
pub enum ParseError {
    /// Found a character that is not a digit, `.`, an operator, a parenthesis
    /// or whitespace.
    InvalidChar {
        /// The offending character.
        ch:       char,
        /// Byte offset of the character in the expression.
        position: usize,
    },
    /// A `)` was found with no unmatched `(` before it.
    OpeningParenthesisMissing {
        /// Byte offset of the unmatched `)`.
        position: usize,
    },
    /// The expression ended while a `(` was still open.
    ClosingParenthesisMissing,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChar { ch, position } => {
                write!(f, "invalid char in expression: '{ch}' at position {position}")
            },
            Self::OpeningParenthesisMissing { position } => {
                write!(f, "opening parenthesis missing for ')' at position {position}")
            },
            Self::ClosingParenthesisMissing => write!(f, "closing parenthesis missing"),
        }
    }
}

impl std::error::Error for ParseError {}

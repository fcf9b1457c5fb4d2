use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
///
/// Whitespace, including Unicode spaces such as U+00A0, never produces a
/// token. A character that matches no variant is
/// reported by the lexer as an error, which the converter turns into
/// [`crate::error::ParseError::InvalidChar`].
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// A run of digits and dots, such as `42`, `3.14` or `.5`.
    ///
    /// The text is kept as written. Whether it is a well-formed number is
    /// decided when the postfix sequence is evaluated.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

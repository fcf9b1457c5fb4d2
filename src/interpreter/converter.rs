use logos::Logos;

use crate::{error::ParseError, interpreter::lexer::Token};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Binding strength of the operator. Multiplicative operators bind
    /// tighter than additive ones.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// One element of a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixToken {
    /// A numeric literal, exactly as written in the expression.
    Number(String),
    /// An operator applied to the two values before it.
    Operator(Operator),
}

impl std::fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(literal) => f.write_str(literal),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
        }
    }
}

/// Pending entries of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Operator(Operator),
    OpenParen,
}

/// What the scanner expects to see next.
///
/// A `+` or `-` read while an operand is expected is a sign, not a binary
/// operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Operand,
    Operator,
}

/// Working state of a single conversion.
struct Converter {
    output:    Vec<PostfixToken>,
    operators: Vec<StackEntry>,
    number:    String,
    expect:    Expect,
}

impl Converter {
    const fn new() -> Self {
        Self { output:    Vec::new(),
               operators: Vec::new(),
               number:    String::new(),
               expect:    Expect::Operand, }
    }

    /// Emits the pending numeric literal, if any.
    fn flush_number(&mut self) {
        if !self.number.is_empty() {
            self.output.push(PostfixToken::Number(std::mem::take(&mut self.number)));
        }
    }

    /// Pops operators that bind at least as tightly as `op`, then pushes it.
    fn push_binary(&mut self, op: Operator) {
        while let Some(&StackEntry::Operator(top)) = self.operators.last()
              && top.precedence() >= op.precedence()
        {
            self.operators.pop();
            self.output.push(PostfixToken::Operator(top));
        }
        self.operators.push(StackEntry::Operator(op));
        self.expect = Expect::Operand;
    }

    /// Handles `+` and `-`, which are signs when an operand is expected.
    ///
    /// A `+` sign is dropped and leaves the operand still expected, so further
    /// signs may follow it. A `-` sign becomes `0 -`.
    fn push_additive(&mut self, op: Operator) {
        match (self.expect, op) {
            (Expect::Operand, Operator::Sub) => {
                self.output.push(PostfixToken::Number("0".to_string()));
                self.operators.push(StackEntry::Operator(Operator::Sub));
                self.expect = Expect::Operator;
            },
            (Expect::Operand, _) => {},
            (Expect::Operator, _) => self.push_binary(op),
        }
    }

    /// Unwinds the operator stack down to the matching `(`.
    fn close_paren(&mut self, position: usize) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some(StackEntry::Operator(op)) => self.output.push(PostfixToken::Operator(op)),
                Some(StackEntry::OpenParen) => break,
                None => return Err(ParseError::OpeningParenthesisMissing { position }),
            }
        }
        self.expect = Expect::Operator;
        Ok(())
    }

    fn feed(&mut self, token: Token, position: usize) -> ParseResult<()> {
        if !matches!(token, Token::Number(_)) {
            self.flush_number();
        }

        match token {
            Token::Number(digits) => {
                // Adjacent runs can only be split by whitespace, which does not
                // end a literal.
                self.number.push_str(&digits);
                self.expect = Expect::Operator;
            },
            Token::LParen => {
                self.operators.push(StackEntry::OpenParen);
                self.expect = Expect::Operand;
            },
            Token::RParen => self.close_paren(position)?,
            Token::Plus => self.push_additive(Operator::Add),
            Token::Minus => self.push_additive(Operator::Sub),
            Token::Star => self.push_binary(Operator::Mul),
            Token::Slash => self.push_binary(Operator::Div),
        }
        Ok(())
    }

    fn finish(mut self) -> ParseResult<Vec<PostfixToken>> {
        self.flush_number();
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Operator(op) => self.output.push(PostfixToken::Operator(op)),
                StackEntry::OpenParen => return Err(ParseError::ClosingParenthesisMissing),
            }
        }
        Ok(self.output)
    }
}

/// Converts an infix expression to postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm over the tokens produced by
/// [`Token`]. Operators of equal precedence associate to the left and
/// parentheses are dropped from the output. A leading `+` (at the start, after
/// `(` or after a binary operator) is ignored and a leading `-` is rewritten as
/// `0 -`.
///
/// The conversion only checks the expression alphabet and parenthesis
/// balance. A missing operand such as in `4+` still converts and is rejected
/// by [`crate::interpreter::evaluator::evaluate`].
///
/// # Errors
/// - [`ParseError::InvalidChar`] for any character other than digits, `.`,
///   `+ - * /`, parentheses and whitespace.
/// - [`ParseError::OpeningParenthesisMissing`] for a `)` without a matching
///   `(`.
/// - [`ParseError::ClosingParenthesisMissing`] when a `(` is never closed.
///
/// # Example
/// ```
/// use calcapi::interpreter::converter::convert;
///
/// let postfix = convert("5*(7+9)").unwrap();
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["5", "7", "9", "+", "*"]);
/// ```
pub fn convert(expression: &str) -> ParseResult<Vec<PostfixToken>> {
    let mut converter = Converter::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        let Ok(token) = token else {
            let ch = expression.get(position..)
                               .and_then(|rest| rest.chars().next())
                               .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(ParseError::InvalidChar { ch, position });
        };
        converter.feed(token, position)?;
    }

    converter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpn(expression: &str) -> String {
        convert(expression).unwrap()
                           .iter()
                           .map(ToString::to_string)
                           .collect::<Vec<_>>()
                           .join(" ")
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(rpn("7+7/7"), "7 7 7 / +");
        assert_eq!(rpn("100/10/2"), "100 10 / 2 /");
        assert_eq!(rpn("1+2+3-4"), "1 2 + 3 + 4 -");
        assert_eq!(rpn("3+6/3*4"), "3 6 3 / 4 * +");
    }

    #[test]
    fn parentheses_are_dropped() {
        assert_eq!(rpn("(14+6)/5"), "14 6 + 5 /");
        assert_eq!(rpn("((2))"), "2");
        assert_eq!(rpn("()"), "");
    }

    #[test]
    fn unary_signs() {
        assert_eq!(rpn("-2"), "0 2 -");
        assert_eq!(rpn("+(3+9)"), "3 9 +");
        assert_eq!(rpn("12*-2"), "12 0 2 - *");
        assert_eq!(rpn("6+ -2"), "6 0 2 - +");
    }

    #[test]
    fn plus_sign_keeps_expecting_an_operand() {
        assert_eq!(rpn("+-5"), "0 5 -");
        assert_eq!(rpn("(+-3)"), "0 3 -");
        assert_eq!(rpn("2*+-3"), "2 0 3 - *");
        assert_eq!(rpn("5++5"), "5 5 +");
    }

    #[test]
    fn minus_sign_then_operator_is_binary() {
        assert_eq!(rpn("--5"), "0 - 5 -");
        assert_eq!(rpn("-+"), "0 - +");
    }

    #[test]
    fn whitespace_does_not_split_literals() {
        assert_eq!(rpn(" 1 2 + 3 "), "12 3 +");
        assert_eq!(rpn("1. 5"), "1.5");
        assert_eq!(rpn("1\u{0B}+\u{A0}2"), "1 2 +");
    }

    #[test]
    fn malformed_operands_still_convert() {
        assert_eq!(rpn("4+"), "4 +");
        assert_eq!(rpn("*42"), "42 *");
        assert_eq!(rpn(""), "");
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(convert("5 + h"), Err(ParseError::InvalidChar { ch: 'h', position: 4 }));
        assert!(matches!(convert("22^37"), Err(ParseError::InvalidChar { ch: '^', .. })));
        assert!(matches!(convert("собака"), Err(ParseError::InvalidChar { ch: 'с', position: 0 })));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(convert("32+23)"), Err(ParseError::OpeningParenthesisMissing { position: 5 }));
        assert_eq!(convert(")29+3("), Err(ParseError::OpeningParenthesisMissing { position: 0 }));
        assert_eq!(convert("(23+32"), Err(ParseError::ClosingParenthesisMissing));
        assert_eq!(convert("(((((8))))"), Err(ParseError::ClosingParenthesisMissing));
    }

    #[test]
    fn errors_are_reported_in_scan_order() {
        assert!(matches!(convert(")h"), Err(ParseError::OpeningParenthesisMissing { .. })));
        assert!(matches!(convert("(h"), Err(ParseError::InvalidChar { .. })));
    }
}

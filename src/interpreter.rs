/// The lexer module splits an expression into tokens.
///
/// The lexer reads the raw expression and produces numeric literals,
/// operators and parentheses, skipping whitespace. Any other character is a
/// lexical error.
pub mod lexer;
/// The converter module reorders tokens from infix to postfix order.
///
/// It implements the shunting-yard algorithm: operator precedence, left
/// associativity, parenthesis matching and unary sign handling all happen
/// here, in a single left-to-right pass.
///
/// # Responsibilities
/// - Accumulates numeric literals and emits them in scan order.
/// - Rewrites unary `-` as `0 -` and drops unary `+`.
/// - Reports invalid characters and unbalanced parentheses.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// It runs the sequence against a stack of `f64` values and reports
/// malformed sequences and division by zero.
pub mod evaluator;

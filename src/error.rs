/// Conversion errors.
///
/// Defines the errors raised while scanning an infix expression and
/// rearranging it into postfix order: characters outside the expression
/// alphabet and unbalanced parentheses.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while computing a postfix sequence: malformed
/// operand structure and division by zero.
pub mod runtime_error;
/// The combined error of a full calculation and its closed set of kinds.
pub mod calc_error;

pub use calc_error::{CalcError, ErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

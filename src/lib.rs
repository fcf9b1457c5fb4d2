//! # calcapi
//!
//! calcapi evaluates arithmetic expressions made of numbers, `+ - * /` and
//! parentheses. Expressions are converted to postfix order with the
//! shunting-yard algorithm and then evaluated on a value stack using `f64`
//! arithmetic.
//!
//! The [`api`] module wraps [`calculate`] for HTTP servers: it decodes a JSON
//! request body, maps every failure to a status code and renders the JSON
//! response.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{Level, debug, enabled};

use crate::{
    error::CalcError,
    interpreter::{converter::convert, evaluator::evaluate},
};

/// Request decoding and response rendering for an HTTP calculation endpoint.
///
/// This module is transport-agnostic: it takes the raw request body and
/// returns a status code and a JSON body, leaving routing and serving to the
/// caller.
///
/// # Responsibilities
/// - Decodes `{"expression": "..."}` and rejects anything else as a bad
///   request.
/// - Maps every [`error::ErrorKind`] to a status code.
/// - Renders `{"result": ...}` and `{"error": "..."}` bodies.
pub mod api;
/// Provides error types for conversion and evaluation.
///
/// Errors are split by phase, as in the rest of the crate, and combined into
/// [`error::CalcError`] whose [`error::ErrorKind`] is what callers map to
/// responses.
pub mod error;
/// The calculation pipeline: lexer, converter and evaluator.
pub mod interpreter;

/// Evaluates an arithmetic expression.
///
/// The expression is converted to postfix order first. A conversion error is
/// returned as is and nothing is evaluated. The function keeps no state
/// between calls, so it can be called concurrently from any number of threads.
///
/// # Errors
/// Returns a [`CalcError`] if the expression contains an invalid character,
/// has unbalanced parentheses, is missing an operand or operator, or divides
/// by zero.
///
/// # Examples
/// ```
/// use calcapi::{calculate, error::ErrorKind};
///
/// assert_eq!(calculate("5*(7+9)").unwrap(), 80.0);
/// assert_eq!(calculate("-(6+7)").unwrap(), -13.0);
///
/// let error = calculate("10/0").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    let result = convert(expression).map_err(CalcError::from).and_then(|postfix| {
        if enabled!(Level::DEBUG) {
            debug!(expression, postfix = %render(&postfix), "converted expression");
        }
        evaluate(&postfix).map_err(CalcError::from)
    });

    match &result {
        Ok(value) => debug!(expression, value, "calculated expression"),
        Err(e) => debug!(expression, kind = %e.kind(), error = %e, "calculation failed"),
    }
    result
}

fn render(postfix: &[interpreter::converter::PostfixToken]) -> String {
    postfix.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

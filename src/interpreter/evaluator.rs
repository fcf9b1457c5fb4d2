use crate::{
    error::RuntimeError,
    interpreter::converter::{Operator, PostfixToken},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Applies a binary operator to two operands.
///
/// `left` is the operand that was pushed first.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] when dividing by zero.
///
/// # Example
/// ```
/// use calcapi::interpreter::{converter::Operator, evaluator::apply};
///
/// assert_eq!(apply(Operator::Sub, 7.0, 3.0), Ok(4.0));
/// assert!(apply(Operator::Div, 1.0, 0.0).is_err());
/// ```
pub fn apply(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    Ok(match op {
           Operator::Add => left + right,
           Operator::Sub => left - right,
           Operator::Mul => left * right,
           Operator::Div => {
               if right == 0.0 {
                   return Err(RuntimeError::DivisionByZero);
               }
               left / right
           },
       })
}

/// Evaluates a postfix sequence.
///
/// Numbers are pushed onto a value stack; every operator replaces the top two
/// values with its result. The sequence must reduce to exactly one value.
///
/// # Errors
/// - [`RuntimeError::InvalidExpression`] if a literal is not a valid number
///   or is too large to be represented as a finite `f64`,
///   an operator is missing an operand, or values are left over.
/// - [`RuntimeError::DivisionByZero`] if any division has a zero divisor.
///
/// # Example
/// ```
/// use calcapi::interpreter::{converter::convert, evaluator::evaluate};
///
/// let postfix = convert("(14+6)/5").unwrap();
/// assert_eq!(evaluate(&postfix), Ok(4.0));
/// ```
pub fn evaluate(postfix: &[PostfixToken]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            PostfixToken::Number(literal) => {
                let value = literal.parse::<f64>()
                                   .ok()
                                   .filter(|value| value.is_finite())
                                   .ok_or_else(|| RuntimeError::InvalidExpression {
                                       details: format!("'{literal}' is not a representable number"),
                                   })?;
                stack.push(value);
            },
            PostfixToken::Operator(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::InvalidExpression {
                        details: format!("operator '{}' is missing an operand", op.symbol()),
                    });
                };
                stack.push(apply(*op, left, right)?);
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(RuntimeError::InvalidExpression { details: "nothing to evaluate".to_string() }),
        values => Err(RuntimeError::InvalidExpression {
            details: format!("{} values are missing an operator", values.len()),
        }),
    }
}

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::{debug, error};

use crate::{calculate, error::ErrorKind};

const EXPRESSION_FIELD: &str = "expression";

/// Body of a calculation request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    /// The expression to evaluate.
    #[serde(default)]
    pub expression: Option<String>,
}

/// Body of a successful calculation.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    /// The value of the expression.
    pub result: Number,
}

/// Body of a failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// A stable, human readable error message.
    pub error: String,
}

/// A request that never reached the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The body is not a JSON object with a non-empty string `expression`.
    BadRequest {
        /// Why the body was rejected.
        details: String,
    },
}

impl RequestError {
    fn bad_request(details: impl Into<String>) -> Self {
        Self::BadRequest { details: details.into() }
    }

    /// The status code reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// The message reported in the response body.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest { details } => write!(f, "bad request: {details}"),
        }
    }
}

impl std::error::Error for RequestError {}

impl ErrorKind {
    /// The status code reported for this kind of failure.
    ///
    /// Every failure of the calculation itself is the client's expression
    /// being unprocessable; only [`ErrorKind::Unexpected`] is a server error.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidCharInExpression
            | Self::InvalidExpression
            | Self::DivisionByZero
            | Self::OpeningParenthesisMissing
            | Self::ClosingParenthesisMissing => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A rendered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code of the response.
    pub status: StatusCode,
    /// JSON body of the response.
    pub body:   String,
}

impl Response {
    fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status, body },
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR,
                       body:   r#"{"error":"unknown error"}"#.to_string(), }
            },
        }
    }

    fn failure(status: StatusCode, message: &str) -> Self {
        Self::json(status, &ErrorResponse { error: message.to_string() })
    }
}

/// Extracts the expression from a request body.
///
/// Only the first JSON value of the body is read. It must be an object whose
/// `expression` field is a non-empty string; other fields are ignored. The
/// field name is matched case-insensitively when no exact match exists.
///
/// # Errors
/// Returns [`RequestError::BadRequest`] for malformed JSON, a body that is not
/// an object, and a missing, `null`, non-string or empty `expression`.
///
/// # Example
/// ```
/// use calcapi::api::decode_request;
///
/// assert_eq!(decode_request(br#"{"expression":"2+2"}"#).unwrap(), "2+2");
/// assert!(decode_request(br#"{"expression":4}"#).is_err());
/// ```
pub fn decode_request(body: &[u8]) -> Result<String, RequestError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
    let value = match values.next() {
        Some(Ok(value)) => value,
        Some(Err(e)) => return Err(RequestError::bad_request(e.to_string())),
        None => return Err(RequestError::bad_request("empty body")),
    };

    let Value::Object(mut fields) = value else {
        return Err(RequestError::bad_request("body is not an object"));
    };

    if !fields.contains_key(EXPRESSION_FIELD) {
        let key = fields.keys().find(|key| key.eq_ignore_ascii_case(EXPRESSION_FIELD)).cloned();
        if let Some(expression) = key.and_then(|key| fields.remove(&key)) {
            fields.insert(EXPRESSION_FIELD.to_string(), expression);
        }
    }

    let request: CalculateRequest =
        serde_json::from_value(Value::Object(fields)).map_err(|e| RequestError::bad_request(e.to_string()))?;

    match request.expression {
        Some(expression) if !expression.is_empty() => Ok(expression),
        _ => Err(RequestError::bad_request("expression is missing")),
    }
}

/// Converts a result into a JSON number, writing whole numbers without a
/// fractional part.
#[allow(clippy::cast_possible_truncation)]
fn to_json_number(value: f64) -> Option<Number> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

/// Handles a calculation request body end to end.
///
/// # Example
/// ```
/// use calcapi::api::handle_calculate;
/// use http::StatusCode;
///
/// let response = handle_calculate(br#"{"expression":"5*(7+9)"}"#);
/// assert_eq!(response.status, StatusCode::OK);
/// assert_eq!(response.body, r#"{"result":80}"#);
///
/// let response = handle_calculate(br#"{"expression":"10/0"}"#);
/// assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
/// assert_eq!(response.body, r#"{"error":"division by zero"}"#);
/// ```
#[must_use]
pub fn handle_calculate(body: &[u8]) -> Response {
    let expression = match decode_request(body) {
        Ok(expression) => expression,
        Err(e) => {
            debug!(error = %e, "rejected request");
            return Response::failure(e.status(), e.as_str());
        },
    };

    match calculate(&expression) {
        Ok(value) => match to_json_number(value) {
            Some(result) => Response::json(StatusCode::OK, &SuccessResponse { result }),
            None => {
                error!(expression, value, "result cannot be represented");
                let kind = ErrorKind::Unexpected;
                Response::failure(kind.status(), kind.as_str())
            },
        },
        Err(e) => Response::failure(e.kind().status(), e.kind().as_str()),
    }
}

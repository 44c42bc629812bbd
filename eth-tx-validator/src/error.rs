use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Errors raised by the validation library itself
///
/// Fee classification never produces one of these: malformed fee input is
/// reported through the `Invalid` classification instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not a 0x-prefixed, 40 hex digit address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// An RPC response failed its schema; the message is already formatted
    /// from the upstream error and is shown to the user as is
    #[error("{0}")]
    RpcResponse(String),
}

/// Service-specific error types
///
/// This enum defines the errors the HTTP surface can report. Each variant
/// maps to a JSON-RPC error code and an HTTP status.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The JSON-RPC envelope or its parameters were malformed
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// The requested JSON-RPC method does not exist
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// The submitted data was well-formed but did not validate
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl ServiceError {
    /// JSON-RPC error code for this error
    pub fn rpc_code(&self) -> i32 {
        match self {
            ServiceError::InvalidParams(_) => -32602,
            ServiceError::MethodNotFound(_) => -32601,
            ServiceError::Validation(_) => -32000,
        }
    }
}

/// Structured error response for the API
///
/// This structure defines the JSON format of error responses returned by the API.
#[derive(Serialize)]
struct ErrorResponse {
    /// Human-readable error message
    error: String,

    /// Machine-readable error code
    error_code: String,

    /// Optional detailed error information
    details: Option<String>,
}

impl ResponseError for ServiceError {
    /// Convert the error to an HTTP response
    fn error_response(&self) -> HttpResponse {
        let (error_code, details) = match self {
            ServiceError::InvalidParams(details) => ("INVALID_PARAMS", Some(details.clone())),
            ServiceError::MethodNotFound(method) => ("METHOD_NOT_FOUND", Some(method.clone())),
            ServiceError::Validation(err) => ("VALIDATION_ERROR", Some(err.to_string())),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        })
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ServiceError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            ServiceError::MethodNotFound(_) => StatusCode::BAD_REQUEST,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request structure
///
/// This structure represents a standard JSON-RPC request with generic parameters.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest<T> {
    /// JSON-RPC protocol version (should be "2.0")
    pub jsonrpc: String,

    /// Method name to call
    pub method: String,

    /// Method parameters
    pub params: T,

    /// Request identifier
    pub id: Value,
}

/// JSON-RPC 2.0 successful response
#[derive(Debug, Serialize)]
pub struct JsonRpcSuccess<T> {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: String,

    /// Request identifier (matching the request)
    pub id: Value,

    /// Method result
    pub result: T,
}

/// JSON-RPC 2.0 error response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// JSON-RPC protocol version (always "2.0")
    pub jsonrpc: String,

    /// Request identifier (matching the request)
    pub id: Value,

    /// Error details
    pub error: JsonRpcErrorDetail,
}

/// JSON-RPC 2.0 error detail
#[derive(Debug, Serialize)]
pub struct JsonRpcErrorDetail {
    /// Error code
    pub code: i32,

    /// Error message
    pub message: String,

    /// Additional error data (optional)
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Create a JSON-RPC error response with an arbitrary code
    pub fn new(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: JsonRpcErrorDetail {
                code,
                message,
                data: None,
            },
        }
    }

    /// Create a new JSON-RPC invalid parameters error
    ///
    /// # Arguments
    ///
    /// * `id` - Request identifier
    /// * `message` - Error message
    pub fn invalid_params(id: Value, message: String) -> Self {
        Self::new(id, -32602, message)
    }
}

impl<T> JsonRpcSuccess<T> {
    /// Create a new JSON-RPC success response
    pub fn new(id: Value, result: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

/// Parse a hexadecimal string into a `u64` value.
///
/// Expects a string starting with "0x".
///
/// # Arguments
///
/// * `hex` - The hexadecimal string
///
/// # Returns
///
/// * `Result<u64, String>` - Parsed value or error message
pub fn parse_hex_u64(hex: &str) -> Result<u64, String> {
    let hex = hex
        .strip_prefix("0x")
        .ok_or_else(|| "Hex value must start with 0x".to_string())?;
    u64::from_str_radix(hex, 16).map_err(|e| format!("Invalid u64 hex value: {}", e))
}

/// Parse a chain id parameter.
///
/// Wallets send chain ids as JSON numbers, decimal strings or 0x-prefixed
/// quantities; all three are accepted.
pub fn parse_chain_id(value: &Value) -> Result<u64, String> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| format!("Invalid chainId: {}", n)),
        Value::String(s) if s.starts_with("0x") => parse_hex_u64(s),
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|e| format!("Invalid chainId: {}", e)),
        other => Err(format!("Invalid chainId: {}", other)),
    }
}

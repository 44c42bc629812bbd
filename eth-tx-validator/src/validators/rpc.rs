//! JSON-RPC response validation
//!
//! Node responses are checked against a fixed shape before UI code reads
//! them. A response that does not fit is either handed to a caller-supplied
//! fallback or turned into a short, user-presentable error.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::input::is_valid_tx_hash;
use crate::error::ValidationError;

/// Longest `message` a well-formed node response may carry
const MAX_STATUS_MESSAGE_LEN: usize = 2;

/// The RPC call a response belongs to, used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiName {
    #[serde(rename = "Get Balance")]
    GetBalance,
    #[serde(rename = "Estimate Gas")]
    EstimateGas,
    #[serde(rename = "Get Token Balance")]
    GetTokenBalance,
    #[serde(rename = "Get Transaction Count")]
    GetTransactionCount,
    #[serde(rename = "Get Current Block")]
    GetCurrentBlock,
    #[serde(rename = "Send Raw Tx")]
    SendRawTx,
    #[serde(rename = "Get Transaction By Hash")]
    GetTransactionByHash,
    #[serde(rename = "Get Transaction Receipt")]
    GetTransactionReceipt,
    #[serde(rename = "Get Block By Number")]
    GetBlockByNumber,
    #[serde(rename = "Get Network Id")]
    GetNetworkId,
}

impl ApiName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiName::GetBalance => "Get Balance",
            ApiName::EstimateGas => "Estimate Gas",
            ApiName::GetTokenBalance => "Get Token Balance",
            ApiName::GetTransactionCount => "Get Transaction Count",
            ApiName::GetCurrentBlock => "Get Current Block",
            ApiName::SendRawTx => "Send Raw Tx",
            ApiName::GetTransactionByHash => "Get Transaction By Hash",
            ApiName::GetTransactionReceipt => "Get Transaction Receipt",
            ApiName::GetBlockByNumber => "Get Block By Number",
            ApiName::GetNetworkId => "Get Network Id",
        }
    }

    fn schema(&self) -> RpcSchema {
        match self {
            ApiName::SendRawTx => RpcSchema::TxHash,
            _ => RpcSchema::RpcNode,
        }
    }
}

impl fmt::Display for ApiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shapes a response can be held against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RpcSchema {
    /// Generic node envelope
    RpcNode,
    /// Node envelope whose result is a transaction hash
    TxHash,
}

impl RpcSchema {
    fn matches(&self, response: &Value) -> bool {
        match self {
            RpcSchema::RpcNode => matches_rpc_node(response),
            RpcSchema::TxHash => {
                matches_rpc_node(response)
                    && response
                        .get("result")
                        .and_then(Value::as_str)
                        .map_or(false, is_valid_tx_hash)
            }
        }
    }
}

/// Only the known envelope keys, each with its expected type. Any other key,
/// `error` included, fails the shape.
fn matches_rpc_node(response: &Value) -> bool {
    let Some(object) = response.as_object() else {
        return false;
    };

    object.iter().all(|(key, value)| match key.as_str() {
        "jsonrpc" | "status" => value.is_string(),
        "id" => value.is_string() || value.is_i64() || value.is_u64(),
        "result" => value.is_string() || value.is_array() || value.is_object(),
        "message" => value
            .as_str()
            .map_or(false, |m| m.chars().count() <= MAX_STATUS_MESSAGE_LEN),
        _ => false,
    })
}

/// Build the user-facing message for a response that failed validation
///
/// Wallet providers sometimes return whole stack traces as the error message.
/// For those only the text after the last `:` of the first line is kept,
/// e.g. `Error: Sign Tx Error: User rejected the signature.` becomes
/// `User rejected the signature.`.
pub fn format_rpc_error(response: &Value, api_name: ApiName) -> String {
    let fallback = || format!("Invalid {} Error", api_name);

    let Some(error) = response.get("error") else {
        return fallback();
    };

    let message = error.get("message").and_then(Value::as_str).unwrap_or_default();
    let lines: Vec<&str> = message.split('\n').collect();

    let formatted = if lines.len() > 2 {
        lines[0].rsplit(':').next().unwrap_or_default().trim().to_string()
    } else {
        let data = match error.get("data") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(data)) => data.clone(),
            Some(other) => other.to_string(),
        };
        format!("{} {}", message, data).trim().to_string()
    };

    if formatted.is_empty() {
        fallback()
    } else {
        formatted
    }
}

/// Whether `response` has the shape expected for `api_name`
pub fn is_valid_result(response: &Value, api_name: ApiName) -> bool {
    api_name.schema().matches(response)
}

/// Validate a response, returning it unchanged when it fits
///
/// # Errors
///
/// * `ValidationError::RpcResponse` - carrying the message built by
///   [`format_rpc_error`]
pub fn validate_rpc_response(response: Value, api_name: ApiName) -> Result<Value, ValidationError> {
    if is_valid_result(&response, api_name) {
        return Ok(response);
    }

    let message = format_rpc_error(&response, api_name);
    debug!(api = %api_name, reason = %message, "rpc response rejected");
    Err(ValidationError::RpcResponse(message))
}

/// Validate a response, handing it to `fallback` when it does not fit
pub fn validate_rpc_response_or_else<F>(response: Value, api_name: ApiName, fallback: F) -> Value
where
    F: FnOnce(Value) -> Value,
{
    if is_valid_result(&response, api_name) {
        response
    } else {
        debug!(api = %api_name, "rpc response rejected, using fallback");
        fallback(response)
    }
}

pub fn is_valid_get_balance(response: Value) -> Result<Value, ValidationError> {
    validate_rpc_response(response, ApiName::GetBalance)
}

pub fn is_valid_estimate_gas(response: Value) -> Result<Value, ValidationError> {
    validate_rpc_response(response, ApiName::EstimateGas)
}

pub fn is_valid_token_balance(response: Value) -> Result<Value, ValidationError> {
    validate_rpc_response(response, ApiName::GetTokenBalance)
}

pub fn is_valid_transaction_count(response: Value) -> Result<Value, ValidationError> {
    validate_rpc_response(response, ApiName::GetTransactionCount)
}

pub fn is_valid_current_block(response: Value) -> Result<Value, ValidationError> {
    validate_rpc_response(response, ApiName::GetCurrentBlock)
}

pub fn is_valid_raw_tx_api(response: Value) -> Result<Value, ValidationError> {
    validate_rpc_response(response, ApiName::SendRawTx)
}

pub fn is_valid_transaction_by_hash(response: Value) -> Result<Value, ValidationError> {
    validate_rpc_response(response, ApiName::GetTransactionByHash)
}

pub fn is_valid_transaction_receipt(response: Value) -> Result<Value, ValidationError> {
    validate_rpc_response(response, ApiName::GetTransactionReceipt)
}

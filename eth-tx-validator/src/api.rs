use crate::{
    error::ServiceError,
    models::jsonrpc::{parse_chain_id, JsonRpcError, JsonRpcRequest, JsonRpcSuccess},
    service::ValidationService,
    validators::{ApiName, TxFeeRequest},
};
use actix_web::{post, web, HttpRequest, HttpResponse, ResponseError};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Endpoint exposing the validators through JSON-RPC 2.0
///
/// Supported methods:
/// * `validate_address` - `[address, chainId?]`, returns a boolean
/// * `validate_checksumAddress` - `[address, chainId?]`, returns the checksummed address
/// * `validate_txFee` - `[feeRequest]`, returns the fee classification
/// * `validate_rpcResponse` - `[response, apiName]`, returns the response when it is well formed
#[post("/api/v1/validate")]
async fn validate_jsonrpc(
    req: HttpRequest,
    service: web::Data<Arc<ValidationService>>,
    request: web::Json<JsonRpcRequest<Vec<Value>>>,
) -> HttpResponse {
    debug!(
        "Received JSON-RPC validation request from {}",
        req.peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );

    // Validate JSON-RPC version
    if request.jsonrpc != "2.0" {
        return HttpResponse::BadRequest().json(JsonRpcError::invalid_params(
            request.id.clone(),
            "Invalid JSON-RPC version. Expected 2.0".to_string(),
        ));
    }

    info!(method = %request.method, params = request.params.len(), "Received validation request");

    match dispatch(&service, &request.method, &request.params) {
        Ok(result) => HttpResponse::Ok().json(JsonRpcSuccess::new(request.id.clone(), result)),
        Err(e) => {
            warn!("Validation request failed: {}", e);
            HttpResponse::build(e.status_code()).json(JsonRpcError::new(
                request.id.clone(),
                e.rpc_code(),
                e.to_string(),
            ))
        }
    }
}

/// Service health check endpoint
#[post("/api/v1/health")]
async fn health_check(service: web::Data<Arc<ValidationService>>) -> HttpResponse {
    info!("Health check requested");

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "default_chain_id": service.default_chain_id(),
    }))
}

/// Configure the API routes for the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_jsonrpc)
       .service(health_check);
}

/// Route a JSON-RPC method to its validator
fn dispatch(
    service: &ValidationService,
    method: &str,
    params: &[Value],
) -> Result<Value, ServiceError> {
    match method {
        "validate_address" => {
            let (address, chain_id) = address_params(params)?;
            Ok(Value::Bool(service.validate_address(address, chain_id)))
        }
        "validate_checksumAddress" => {
            let (address, chain_id) = address_params(params)?;
            Ok(Value::String(service.checksum_address(address, chain_id)?))
        }
        "validate_txFee" => {
            let raw = params.first().ok_or_else(|| {
                ServiceError::InvalidParams("Missing transaction fee parameters".to_string())
            })?;
            let fee_request: TxFeeRequest = serde_json::from_value(raw.clone())
                .map_err(|e| ServiceError::InvalidParams(format!("Invalid fee request: {}", e)))?;
            Ok(json!(service.validate_tx_fee(&fee_request)))
        }
        "validate_rpcResponse" => {
            let (response, api_name) = match params {
                [response, api_name, ..] => (response, api_name),
                _ => {
                    return Err(ServiceError::InvalidParams(
                        "Expected [response, apiName]".to_string(),
                    ))
                }
            };
            let api_name: ApiName = serde_json::from_value(api_name.clone())
                .map_err(|e| ServiceError::InvalidParams(format!("Unknown apiName: {}", e)))?;
            Ok(service.validate_rpc_response(response.clone(), api_name)?)
        }
        other => Err(ServiceError::MethodNotFound(other.to_string())),
    }
}

/// Extract `[address, chainId?]`
fn address_params(params: &[Value]) -> Result<(&str, Option<u64>), ServiceError> {
    let address = params
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| ServiceError::InvalidParams("Missing address parameter".to_string()))?;

    let chain_id = match params.get(1) {
        None | Some(Value::Null) => None,
        Some(value) => Some(parse_chain_id(value).map_err(ServiceError::InvalidParams)?),
    };

    Ok((address, chain_id))
}

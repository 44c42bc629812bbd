//! Integration tests for the API endpoints

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use eth_tx_validator::{api, service::ValidationService};

use helpers::{init_logger, rpc_request};

/// Posts `request` to the validation endpoint of a fresh app.
async fn call_validate(request: &Value) -> (StatusCode, Value) {
    init_logger();

    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(Arc::new(ValidationService::default())))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/validate")
        .set_json(request)
        .to_request();

    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let response: Value = serde_json::from_slice(&body).expect("Failed to parse JSON response");
    (status, response)
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Arc::new(ValidationService::new(
                30,
                Default::default(),
            ))))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let response: Value = serde_json::from_slice(&body).expect("Failed to parse JSON response");
    assert_eq!(response["status"], "ok");
    assert_eq!(response["default_chain_id"], 30);
    assert!(response.get("version").is_some());
}

#[actix_web::test]
async fn test_validate_address_endpoint() {
    let request = rpc_request(
        "validate_address",
        json!(["0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"]),
        1,
    );
    let (status, response) = call_validate(&request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"], true);

    // Same address with a broken checksum
    let request = rpc_request(
        "validate_address",
        json!(["0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD", "0x1"]),
        2,
    );
    let (status, response) = call_validate(&request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"], false);
}

#[actix_web::test]
async fn test_checksum_address_endpoint() {
    let request = rpc_request(
        "validate_checksumAddress",
        json!(["0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359", 1]),
        3,
    );
    let (status, response) = call_validate(&request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"], "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");

    let request = rpc_request("validate_checksumAddress", json!(["0x1234"]), 4);
    let (status, response) = call_validate(&request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["error"]["code"], -32000);
}

#[actix_web::test]
async fn test_tx_fee_endpoint() {
    let request = rpc_request(
        "validate_txFee",
        json!([{
            "amount": "10",
            "assetRateUsd": 2000,
            "assetRateFiat": "1800",
            "isERC20": false,
            "gasLimit": "21000",
            "gasPrice": "5000"
        }]),
        5,
    );
    let (status, response) = call_validate(&request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"]["type"], "Error-Very-High-Tx-Fee");
    assert_eq!(response["result"]["amount"], "18000.0000");
    assert_eq!(response["result"]["fee"], "189.0000");
}

#[actix_web::test]
async fn test_tx_fee_endpoint_invalid_numbers() {
    let request = rpc_request(
        "validate_txFee",
        json!([{
            "amount": "abc",
            "assetRateUsd": 2000,
            "assetRateFiat": 2000,
            "gasLimit": "21000",
            "gasPrice": "20"
        }]),
        6,
    );
    let (status, response) = call_validate(&request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"]["type"], "Invalid");
    assert_eq!(response["result"]["amount"], "");
}

#[actix_web::test]
async fn test_rpc_response_endpoint() {
    let node_response = json!({"jsonrpc": "2.0", "id": 1, "result": "0x5208"});
    let request = rpc_request("validate_rpcResponse", json!([node_response, "Estimate Gas"]), 7);
    let (status, response) = call_validate(&request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["result"], node_response);

    let node_response = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": {"code": -32000, "message": "Error: Provider Error: User denied transaction.\nat x\nat y"}
    });
    let request = rpc_request("validate_rpcResponse", json!([node_response, "Send Raw Tx"]), 8);
    let (status, response) = call_validate(&request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["id"], 8);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("User denied transaction."));
}

#[actix_web::test]
async fn test_invalid_request_handling() {
    // Wrong protocol version
    let mut request = rpc_request("validate_address", json!(["0x0"]), 9);
    request["jsonrpc"] = json!("1.0");
    let (status, response) = call_validate(&request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], -32602);

    // Unknown method
    let request = rpc_request("eth_estimateGas", json!([]), 10);
    let (status, response) = call_validate(&request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], -32601);

    // Missing params
    let request = rpc_request("validate_address", json!([]), 11);
    let (status, response) = call_validate(&request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["code"], -32602);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Missing address parameter"));

    // Unknown api name
    let request = rpc_request("validate_rpcResponse", json!([{}, "Get Everything"]), 12);
    let (status, _) = call_validate(&request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

//! Library-level tests for the validators
//!
//! These go through the public API only, the way UI code calls it.

use rust_decimal::Decimal;
use serde_json::json;

use eth_tx_validator::validators::{
    address::{address_case, is_checksum_address, RSK_TESTNET_CHAIN_ID},
    input::{is_valid_gas_limit, is_valid_gas_price},
    is_valid_address, to_checksum_address, validate_rpc_response, validate_rpc_response_or_else,
    validate_tx_fee, AddressCase, ApiName, TxFeeKind, TxFeeRequest,
};

const ADDRESSES: [&str; 3] = [
    "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
    "0xFB6916095CA1DF60BB79CE92CE3EA74C37C5D359",
    "0xdbf03b407c01e7cd3cbea99509d93f8dddc8c6fb",
];

fn fee_request(amount: &str, gas_limit: &str, gas_price: &str) -> TxFeeRequest {
    TxFeeRequest {
        amount: amount.to_string(),
        asset_rate_usd: Decimal::from(1500),
        asset_rate_fiat: Decimal::from(1500),
        is_erc20: false,
        gas_limit: gas_limit.to_string(),
        gas_price: gas_price.to_string(),
        base_asset_rate_usd: None,
        base_asset_rate_fiat: None,
    }
}

#[test]
fn addresses_without_prefix_are_rejected() {
    for address in ADDRESSES {
        let body = &address[2..];
        assert!(!is_valid_address(body, 1));
        assert!(!is_valid_address(&format!("x0{body}"), 1));
    }
}

#[test]
fn single_case_addresses_pass_on_every_chain() {
    for address in ADDRESSES {
        assert_ne!(address_case(address), Some(AddressCase::Mixed));
        for chain_id in [1, 5, 30, 31, 137] {
            assert!(is_valid_address(address, chain_id));
        }
    }
}

#[test]
fn mixed_case_addresses_follow_checksum() {
    for address in ADDRESSES {
        for chain_id in [1, RSK_TESTNET_CHAIN_ID] {
            let checksummed = to_checksum_address(address, chain_id).unwrap();
            assert_eq!(address_case(&checksummed), Some(AddressCase::Mixed));
            assert!(is_valid_address(&checksummed, chain_id));
            assert!(is_checksum_address(&checksummed, chain_id));

            // swapping the case of every letter breaks a mixed-case checksum
            let swapped: String = checksummed[2..]
                .chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect();
            assert!(!is_valid_address(&format!("0x{swapped}"), chain_id));
        }
    }
}

#[test]
fn dust_amount_fee_is_none() {
    let response = validate_tx_fee(&fee_request("0.0000001", "21000", "40"));
    assert_eq!(response.kind, TxFeeKind::None);
}

#[test]
fn fee_over_hundred_dollars_is_very_high() {
    // 0.084 ETH at $1500 = $126
    let response = validate_tx_fee(&fee_request("5", "21000", "4000"));
    assert_eq!(response.kind, TxFeeKind::VeryHigh);

    // half an ETH worth little
    let mut request = fee_request("5", "500000", "1000");
    request.asset_rate_usd = Decimal::new(1, 2);
    request.asset_rate_fiat = Decimal::new(1, 2);
    assert_eq!(validate_tx_fee(&request).kind, TxFeeKind::VeryHigh);
}

#[test]
fn malformed_numbers_are_invalid() {
    assert_eq!(validate_tx_fee(&fee_request("abc", "21000", "40")).kind, TxFeeKind::Invalid);
    assert_eq!(validate_tx_fee(&fee_request("1", "abc", "40")).kind, TxFeeKind::Invalid);
    assert_eq!(validate_tx_fee(&fee_request("1", "21000", "abc")).kind, TxFeeKind::Invalid);
    assert_eq!(validate_tx_fee(&fee_request("1,5", "21000", "40")).kind, TxFeeKind::Invalid);
}

#[test]
fn gas_inputs_within_bounds() {
    assert!(is_valid_gas_limit("21000"));
    assert!(!is_valid_gas_limit("abc"));
    assert!(is_valid_gas_price("40"));
    assert!(!is_valid_gas_price("0"));
}

#[test]
fn rpc_error_surfaces_first_line() {
    let response = json!({
        "jsonrpc": "2.0",
        "id": 4,
        "error": {
            "code": -32603,
            "message": "Error: Ledger Sign Error: Device locked\n  at sign (ledger.js:10:3)\n  at send (tx.js:99:1)"
        }
    });

    let err = validate_rpc_response(response, ApiName::SendRawTx).unwrap_err();
    assert_eq!(err.to_string(), "Device locked");
}

#[test]
fn rpc_fallback_replaces_error() {
    let response = json!({"jsonrpc": "2.0", "id": 4, "error": {"message": "header not found"}});
    let result = validate_rpc_response_or_else(response, ApiName::GetBalance, |_| json!({"result": "0x0"}));
    assert_eq!(result["result"], "0x0");
}

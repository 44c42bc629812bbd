//! Address well-formedness and checksum validation
//!
//! Mixed-case addresses carry a checksum in their letter casing (EIP-55).
//! RSK networks salt that checksum with the chain id (EIP-1191), so the
//! chain id decides which encoding a mixed-case address is held against.

use alloy_primitives::{hex, Address};
use tracing::debug;

use crate::error::ValidationError;

/// RSK mainnet chain id
pub const RSK_MAINNET_CHAIN_ID: u64 = 30;

/// RSK testnet chain id
pub const RSK_TESTNET_CHAIN_ID: u64 = 31;

const DEAD_ADDRESS: &str = "000000000000000000000000000000000000dead";

/// Letter casing of an address body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressCase {
    /// No uppercase hex letters (includes bodies without any letters)
    Lower,
    /// Only uppercase hex letters
    Upper,
    /// Both cases present, so the casing must be a valid checksum
    Mixed,
}

/// Whether `chain_id` uses the chain-aware EIP-1191 checksum
pub fn uses_chain_checksum(chain_id: u64) -> bool {
    matches!(chain_id, RSK_MAINNET_CHAIN_ID | RSK_TESTNET_CHAIN_ID)
}

/// Strip the `0x`/`0X` prefix and return the 40 digit body, if well formed
fn hex_body(address: &str) -> Option<&str> {
    let body = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))?;
    (body.len() == 40 && body.bytes().all(|b| b.is_ascii_hexdigit())).then_some(body)
}

/// Classify the casing of a well-formed address, `None` if malformed
pub fn address_case(address: &str) -> Option<AddressCase> {
    let body = hex_body(address)?;
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());

    Some(match (has_lower, has_upper) {
        (true, true) => AddressCase::Mixed,
        (false, true) => AddressCase::Upper,
        _ => AddressCase::Lower,
    })
}

/// Produce the checksummed form of `address` for `chain_id`
///
/// # Arguments
///
/// * `address` - A 0x-prefixed address in any casing
/// * `chain_id` - Network the address is used on
///
/// # Returns
///
/// * `Result<String, ValidationError>` - `0x` followed by the checksummed body
pub fn to_checksum_address(address: &str, chain_id: u64) -> Result<String, ValidationError> {
    let body = hex_body(address).ok_or_else(|| ValidationError::InvalidAddress(address.to_string()))?;
    let bytes = hex::decode(body).map_err(|_| ValidationError::InvalidAddress(address.to_string()))?;

    let checksum_chain = uses_chain_checksum(chain_id).then_some(chain_id);
    Ok(Address::from_slice(&bytes).to_checksum(checksum_chain))
}

/// Strict check: the casing must be exactly the checksum for `chain_id`
pub fn is_checksum_address(address: &str, chain_id: u64) -> bool {
    match (hex_body(address), to_checksum_address(address, chain_id)) {
        (Some(body), Ok(checksummed)) => body == &checksummed[2..],
        _ => false,
    }
}

/// Validate an address for `chain_id`
///
/// Single-case addresses carry no checksum and are accepted as long as they
/// are well formed; mixed-case addresses must match the chain's checksum.
pub fn is_valid_address(address: &str, chain_id: u64) -> bool {
    let valid = match address_case(address) {
        None => false,
        Some(AddressCase::Lower) | Some(AddressCase::Upper) => true,
        Some(AddressCase::Mixed) => is_checksum_address(address, chain_id),
    };
    debug!(address, chain_id, valid, "address validated");
    valid
}

/// Whether the address is the zero address or the conventional `0x…dEaD` sink
pub fn is_burn_address(address: &str) -> bool {
    match hex_body(address) {
        Some(body) => {
            let body = body.to_ascii_lowercase();
            body.bytes().all(|b| b == b'0') || body == DEAD_ADDRESS
        }
        None => false,
    }
}

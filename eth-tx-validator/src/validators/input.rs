//! Validators for the free-form fields of wallet forms

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

/// Lowest gas limit accepted for a transaction (a plain transfer)
pub const GAS_LIMIT_LOWER_BOUND: u64 = 21_000;

/// Highest gas limit accepted for a transaction
pub const GAS_LIMIT_UPPER_BOUND: u64 = 8_000_000;

/// Gas price bounds in gwei
pub const GAS_PRICE_GWEI_LOWER_BOUND: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
pub const GAS_PRICE_GWEI_UPPER_BOUND: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap());
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static HEX_DATA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[xX]([0-9a-fA-F]{2})*$").unwrap());
static TX_HASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{64}$").unwrap());
static PRIVATE_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0x)?[0-9a-fA-F]{64}$").unwrap());
static ENS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z0-9]([a-z0-9-]*[a-z0-9])?\.)+eth$").unwrap());
static DERIVATION_PATH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^m(/[0-9]+'?)+$").unwrap());

/// Parse an unsigned decimal literal such as `1`, `0.05` or `21000`
///
/// Signs, exponents, separators and values beyond `Decimal`'s range are rejected.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    if !DECIMAL_RE.is_match(value) {
        return None;
    }
    Decimal::from_str(value).ok()
}

/// 0x-prefixed hex data with whole bytes (`0x` alone is empty data)
pub fn is_valid_hex(value: &str) -> bool {
    HEX_DATA_RE.is_match(value)
}

/// 0x-prefixed 32 byte transaction hash
pub fn is_valid_tx_hash(value: &str) -> bool {
    TX_HASH_RE.is_match(value)
}

/// 32 byte hex private key, optional 0x prefix, not zero
pub fn is_valid_private_key(value: &str) -> bool {
    let value = value.trim();
    PRIVATE_KEY_RE.is_match(value)
        && !value
            .trim_start_matches("0x")
            .bytes()
            .all(|b| b == b'0')
}

/// ENS name under the `.eth` root, e.g. `vitalik.eth` or `pay.alice.eth`
pub fn is_valid_ens_name(value: &str) -> bool {
    ENS_NAME_RE.is_match(&value.to_lowercase())
}

/// BIP-32 derivation path such as `m/44'/60'/0'/0`
pub fn is_valid_derivation_path(value: &str) -> bool {
    DERIVATION_PATH_RE.is_match(value)
}

/// Non-negative integer that fits an account nonce
pub fn is_valid_nonce(value: &str) -> bool {
    INTEGER_RE.is_match(value) && value.parse::<u64>().is_ok()
}

/// Decimal strictly greater than zero
pub fn is_positive_number(value: &str) -> bool {
    parse_decimal(value).map_or(false, |v| v > Decimal::ZERO)
}

/// Integer gas limit within the accepted bounds
pub fn is_valid_gas_limit(value: &str) -> bool {
    INTEGER_RE.is_match(value)
        && value
            .parse::<u64>()
            .map_or(false, |gas| (GAS_LIMIT_LOWER_BOUND..=GAS_LIMIT_UPPER_BOUND).contains(&gas))
}

/// Gas price in gwei within the accepted bounds
pub fn is_valid_gas_price(value: &str) -> bool {
    parse_decimal(value).map_or(false, |price| {
        (GAS_PRICE_GWEI_LOWER_BOUND..=GAS_PRICE_GWEI_UPPER_BOUND).contains(&price)
    })
}

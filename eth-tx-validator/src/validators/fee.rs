//! Transaction fee classification
//!
//! A fee is judged by its USD value and, for native-asset sends, by its size
//! in ETH. The first threshold crossed, from the most severe down, decides
//! the classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::parse_decimal;

/// Classification of a transaction fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxFeeKind {
    #[serde(rename = "None")]
    None,
    /// The fee is worth more than the amount being sent
    #[serde(rename = "Warning")]
    Warning,
    #[serde(rename = "Error-Use-Lower")]
    UseLower,
    #[serde(rename = "Error-High-Tx-Fee")]
    High,
    #[serde(rename = "Error-Very-High-Tx-Fee")]
    VeryHigh,
    /// Amount, gas limit or gas price could not be parsed
    #[serde(rename = "Invalid")]
    Invalid,
}

/// Input of [`validate_tx_fee`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxFeeRequest {
    /// Amount sent, in units of the asset
    pub amount: String,

    /// Price of the asset in USD
    pub asset_rate_usd: Decimal,

    /// Price of the asset in the user's local fiat currency
    pub asset_rate_fiat: Decimal,

    /// The asset is an ERC-20 token, so the fee is paid in a different asset
    #[serde(default, rename = "isERC20")]
    pub is_erc20: bool,

    /// Gas limit in gas units
    pub gas_limit: String,

    /// Gas price in gwei
    pub gas_price: String,

    /// Price of the fee-paying base asset in USD, used for ERC-20 sends
    #[serde(default)]
    pub base_asset_rate_usd: Option<Decimal>,

    /// Price of the fee-paying base asset in local fiat, used for ERC-20 sends
    #[serde(default)]
    pub base_asset_rate_fiat: Option<Decimal>,
}

/// Result of a fee classification
///
/// `amount` and `fee` are local fiat values with four decimals, empty when
/// the input was invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxFeeResponse {
    #[serde(rename = "type")]
    pub kind: TxFeeKind,
    pub amount: String,
    pub fee: String,
}

impl TxFeeResponse {
    fn invalid() -> Self {
        Self {
            kind: TxFeeKind::Invalid,
            amount: String::new(),
            fee: String::new(),
        }
    }
}

/// Fee thresholds, USD values and ETH fractions per severity
///
/// A fee must be strictly above a USD threshold, while reaching an ETH
/// fraction is enough to trigger its level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeThresholds {
    pub very_high_usd: Decimal,
    pub high_usd: Decimal,
    pub use_lower_usd: Decimal,
    pub very_high_eth: Decimal,
    pub high_eth: Decimal,
    pub use_lower_eth: Decimal,
    /// Amounts below this are too small to judge a fee against
    pub min_amount: Decimal,
}

impl Default for FeeThresholds {
    fn default() -> Self {
        Self {
            very_high_usd: Decimal::from(100),
            high_usd: Decimal::from(25),
            use_lower_usd: Decimal::from(5),
            very_high_eth: Decimal::new(5, 1),
            high_eth: Decimal::new(15, 2),
            use_lower_eth: Decimal::new(5, 2),
            min_amount: Decimal::new(1, 6),
        }
    }
}

/// One gwei expressed in ETH
const GWEI: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

fn format_fiat(value: Decimal) -> String {
    format!("{:.4}", value.round_dp(4))
}

/// Classify a transaction fee with the default thresholds
pub fn validate_tx_fee(request: &TxFeeRequest) -> TxFeeResponse {
    validate_tx_fee_with(request, &FeeThresholds::default())
}

/// Classify a transaction fee against `thresholds`
///
/// Malformed numbers (and arithmetic overflow) yield [`TxFeeKind::Invalid`].
pub fn validate_tx_fee_with(request: &TxFeeRequest, thresholds: &FeeThresholds) -> TxFeeResponse {
    match classify(request, thresholds) {
        Some(response) => {
            debug!(kind = ?response.kind, fee = %response.fee, "transaction fee classified");
            response
        }
        None => {
            debug!(
                amount = %request.amount,
                gas_limit = %request.gas_limit,
                gas_price = %request.gas_price,
                "transaction fee input invalid"
            );
            TxFeeResponse::invalid()
        }
    }
}

fn classify(request: &TxFeeRequest, thresholds: &FeeThresholds) -> Option<TxFeeResponse> {
    let amount = parse_decimal(&request.amount)?;
    let gas_limit = parse_decimal(&request.gas_limit)?;
    let gas_price = parse_decimal(&request.gas_price)?;

    // fee in base asset units
    let fee = gas_limit.checked_mul(gas_price)?.checked_mul(GWEI)?;

    let (base_rate_usd, base_rate_fiat) = if request.is_erc20 {
        (
            request.base_asset_rate_usd.unwrap_or(Decimal::ZERO),
            request.base_asset_rate_fiat.unwrap_or(Decimal::ZERO),
        )
    } else {
        (request.asset_rate_usd, request.asset_rate_fiat)
    };

    let fee_usd = fee.checked_mul(base_rate_usd)?;
    let amount_usd = amount.checked_mul(request.asset_rate_usd)?;

    // ETH fractions only compare like with like
    let fee_at_least = |fraction: Decimal| !request.is_erc20 && fee >= fraction;

    let kind = if amount < thresholds.min_amount {
        TxFeeKind::None
    } else if fee_usd > thresholds.very_high_usd || fee_at_least(thresholds.very_high_eth) {
        TxFeeKind::VeryHigh
    } else if fee_usd > thresholds.high_usd || fee_at_least(thresholds.high_eth) {
        TxFeeKind::High
    } else if fee_usd > thresholds.use_lower_usd || fee_at_least(thresholds.use_lower_eth) {
        TxFeeKind::UseLower
    } else if fee_usd > amount_usd {
        TxFeeKind::Warning
    } else {
        TxFeeKind::None
    };

    Some(TxFeeResponse {
        kind,
        amount: format_fiat(amount.checked_mul(request.asset_rate_fiat)?),
        fee: format_fiat(fee.checked_mul(base_rate_fiat)?),
    })
}

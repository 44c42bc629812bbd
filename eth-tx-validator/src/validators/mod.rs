//! Stateless validators for wallet input
//!
//! Every function here is pure: results depend only on the arguments, which
//! lets UI code and the HTTP surface call them freely.

pub mod address;
pub mod fee;
pub mod input;
pub mod rpc;

pub use address::{is_valid_address, to_checksum_address, AddressCase};
pub use fee::{validate_tx_fee, validate_tx_fee_with, FeeThresholds, TxFeeKind, TxFeeRequest, TxFeeResponse};
pub use rpc::{validate_rpc_response, validate_rpc_response_or_else, ApiName};

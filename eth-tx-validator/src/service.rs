use crate::{
    config::Config,
    error::ValidationError,
    validators::{
        address, fee, rpc, ApiName, FeeThresholds, TxFeeRequest, TxFeeResponse,
    },
};
use serde_json::Value;
use tracing::{debug, instrument};

/// Validation service shared by the HTTP workers
///
/// Holds the configuration-derived parts of validation (default chain and
/// fee thresholds); the checks themselves are the stateless functions in
/// [`crate::validators`].
#[derive(Debug, Clone)]
pub struct ValidationService {
    default_chain_id: u64,
    fee_thresholds: FeeThresholds,
}

impl ValidationService {
    /// Creates a service with the given default chain and thresholds
    pub fn new(default_chain_id: u64, fee_thresholds: FeeThresholds) -> Self {
        Self {
            default_chain_id,
            fee_thresholds,
        }
    }

    /// Creates a service from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_chain_id, config.fee_thresholds.clone())
    }

    pub fn default_chain_id(&self) -> u64 {
        self.default_chain_id
    }

    /// Validate an address on `chain_id`, or the default chain
    #[instrument(skip(self))]
    pub fn validate_address(&self, address: &str, chain_id: Option<u64>) -> bool {
        address::is_valid_address(address, chain_id.unwrap_or(self.default_chain_id))
    }

    /// Checksummed form of an address on `chain_id`, or the default chain
    #[instrument(skip(self), err)]
    pub fn checksum_address(&self, address: &str, chain_id: Option<u64>) -> Result<String, ValidationError> {
        address::to_checksum_address(address, chain_id.unwrap_or(self.default_chain_id))
    }

    /// Classify a transaction fee with the configured thresholds
    #[instrument(skip(self, request))]
    pub fn validate_tx_fee(&self, request: &TxFeeRequest) -> TxFeeResponse {
        debug!("Classifying fee for request: {:?}", request);
        fee::validate_tx_fee_with(request, &self.fee_thresholds)
    }

    /// Validate a node response for `api_name`
    #[instrument(skip(self, response), err)]
    pub fn validate_rpc_response(&self, response: Value, api_name: ApiName) -> Result<Value, ValidationError> {
        rpc::validate_rpc_response(response, api_name)
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new(1, FeeThresholds::default())
    }
}

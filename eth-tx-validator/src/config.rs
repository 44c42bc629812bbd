use eyre::Result;
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

use crate::validators::FeeThresholds;

/// Service configuration structure
///
/// This structure contains all the configuration parameters for the validation service.
/// It handles loading values from environment variables with appropriate defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind the server to (default: 127.0.0.1)
    pub host: String,

    /// Port to listen on (default: 8080)
    pub port: u16,

    /// Chain id used when a request does not name one (default: 1)
    pub default_chain_id: u64,

    /// Fee classification thresholds
    pub fee_thresholds: FeeThresholds,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This method reads configuration from environment variables,
    /// using default values when variables are not defined.
    ///
    /// # Environment Variables
    ///
    /// * `HOST` - Server host address (default: "127.0.0.1")
    /// * `PORT` - Server port (default: 8080)
    /// * `DEFAULT_CHAIN_ID` - Chain id for address checks (default: 1)
    /// * `FEE_VERY_HIGH_USD` - Very high fee threshold in USD (default: 100)
    /// * `FEE_HIGH_USD` - High fee threshold in USD (default: 25)
    /// * `FEE_USE_LOWER_USD` - Threshold in USD above which a lower fee is suggested (default: 5)
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (useful for development)
        let _ = dotenv::dotenv();

        let defaults = FeeThresholds::default();
        let fee_thresholds = FeeThresholds {
            very_high_usd: decimal_var("FEE_VERY_HIGH_USD", defaults.very_high_usd)?,
            high_usd: decimal_var("FEE_HIGH_USD", defaults.high_usd)?,
            use_lower_usd: decimal_var("FEE_USE_LOWER_USD", defaults.use_lower_usd)?,
            ..defaults
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()?,
            default_chain_id: env::var("DEFAULT_CHAIN_ID")
                .unwrap_or_else(|_| "1".to_string())
                .parse::<u64>()?,
            fee_thresholds,
        })
    }
}

fn decimal_var(name: &str, default: Decimal) -> Result<Decimal> {
    match env::var(name) {
        Ok(value) => Decimal::from_str(&value)
            .map_err(|e| eyre::eyre!("{} must be a decimal: {}", name, e)),
        Err(_) => Ok(default),
    }
}

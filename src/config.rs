//! Teesa plugin configuration
//!
//! Configuration is built once at startup, either from environment variables or
//! programmatically, and handed to each component by reference.

use alloy::primitives::Address;
use url::Url;

use crate::constants::{ENV_CONTRACT_ADDRESS, ENV_HISTORY_URL, ENV_RPC_URL};
use crate::error::{TeesaError, TeesaResult};

/// Endpoints and contract location for the Teesa game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeesaConfig {
    /// JSON-RPC endpoint of the chain hosting the game contract
    pub rpc_url: Url,
    /// Game contract address
    pub contract_address: Address,
    /// Base URL of the Teesa history service
    pub history_url: Url,
}

impl TeesaConfig {
    /// Create a configuration from raw strings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParams` if a URL or the contract address cannot be parsed.
    pub fn new(rpc_url: &str, contract_address: &str, history_url: &str) -> TeesaResult<Self> {
        let rpc_url = Url::parse(rpc_url)?;
        let history_url = Url::parse(history_url)?;
        let contract_address = contract_address.trim().parse::<Address>().map_err(|e| {
            TeesaError::invalid_params(format!(
                "Invalid contract address '{contract_address}': {e}"
            ))
        })?;

        Ok(Self {
            rpc_url,
            contract_address,
            history_url,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// # Required Variables
    ///
    /// - `TEESA_RPC_URL`: JSON-RPC endpoint
    /// - `TEESA_CONTRACT_ADDRESS`: Game contract address
    /// - `TEESA_URL`: History service base URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` for an unset or empty variable and
    /// `InvalidParams` for a value that does not parse.
    pub fn from_env() -> TeesaResult<Self> {
        dotenvy::dotenv().ok();

        let rpc_url = required_var(ENV_RPC_URL)?;
        let contract_address = required_var(ENV_CONTRACT_ADDRESS)?;
        let history_url = required_var(ENV_HISTORY_URL)?;

        Self::new(&rpc_url, &contract_address, &history_url)
    }

    /// URL of the non-system message listing on the history service
    pub fn messages_url(&self) -> TeesaResult<Url> {
        let mut base = self.history_url.clone();
        // Url::join drops the last segment unless the base ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base.join(crate::constants::MESSAGES_PATH)?;
        url.query_pairs_mut()
            .append_pair("includeSystemMessages", "false");
        Ok(url)
    }
}

fn required_var(key: &str) -> TeesaResult<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TeesaError::config_missing(key)),
    }
}

#![allow(missing_docs)]
//! Read-only access to the Teesa game contract
//!
//! Each supported view method is a [`ContractMethod`] variant that knows its
//! selector and how to decode its single return word.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::TransactionRequest,
    sol,
    sol_types::{SolCall, SolValue},
    transports::http::{Client, Http},
};
use async_trait::async_trait;
use std::fmt;

use crate::config::TeesaConfig;
use crate::constants::{DEFAULT_DECIMALS, DISPLAY_DECIMALS};
use crate::error::{TeesaError, TeesaErrorCode, TeesaResult};
use crate::types::{format_fixed, ContractSnapshot, ContractValue, ReturnKind};

sol! {
    interface ITeesaGame {
        function prizePool() external view returns (uint256);
        function currentFee() external view returns (uint256);
        function abandonedGameTimeElapsed() external view returns (bool);
        function lastPlayerAddress() external view returns (address);
        function winnerAddress() external view returns (address);
    }
}

/// Zero-argument view methods exposed by the game contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractMethod {
    PrizePool,
    CurrentFee,
    AbandonedGameTimeElapsed,
    LastPlayerAddress,
    WinnerAddress,
}

impl ContractMethod {
    /// Solidity function name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PrizePool => "prizePool",
            Self::CurrentFee => "currentFee",
            Self::AbandonedGameTimeElapsed => "abandonedGameTimeElapsed",
            Self::LastPlayerAddress => "lastPlayerAddress",
            Self::WinnerAddress => "winnerAddress",
        }
    }

    #[must_use]
    pub const fn return_kind(&self) -> ReturnKind {
        match self {
            Self::PrizePool | Self::CurrentFee => ReturnKind::Uint,
            Self::AbandonedGameTimeElapsed => ReturnKind::Bool,
            Self::LastPlayerAddress | Self::WinnerAddress => ReturnKind::Address,
        }
    }

    #[must_use]
    pub const fn signature(&self) -> &'static str {
        match self {
            Self::PrizePool => ITeesaGame::prizePoolCall::SIGNATURE,
            Self::CurrentFee => ITeesaGame::currentFeeCall::SIGNATURE,
            Self::AbandonedGameTimeElapsed => ITeesaGame::abandonedGameTimeElapsedCall::SIGNATURE,
            Self::LastPlayerAddress => ITeesaGame::lastPlayerAddressCall::SIGNATURE,
            Self::WinnerAddress => ITeesaGame::winnerAddressCall::SIGNATURE,
        }
    }

    /// Four-byte function selector used as the call data
    #[must_use]
    pub const fn selector(&self) -> [u8; 4] {
        match self {
            Self::PrizePool => ITeesaGame::prizePoolCall::SELECTOR,
            Self::CurrentFee => ITeesaGame::currentFeeCall::SELECTOR,
            Self::AbandonedGameTimeElapsed => ITeesaGame::abandonedGameTimeElapsedCall::SELECTOR,
            Self::LastPlayerAddress => ITeesaGame::lastPlayerAddressCall::SELECTOR,
            Self::WinnerAddress => ITeesaGame::winnerAddressCall::SELECTOR,
        }
    }

    /// Decode the ABI-encoded return data of this method.
    pub fn decode(&self, data: &[u8]) -> TeesaResult<ContractValue> {
        let decoded = match self.return_kind() {
            ReturnKind::Uint => U256::abi_decode(data, true).map(ContractValue::Uint),
            ReturnKind::Bool => bool::abi_decode(data, true).map(ContractValue::Bool),
            ReturnKind::Address => Address::abi_decode(data, true).map(ContractValue::Address),
        };

        decoded.map_err(|e| {
            TeesaError::with_source(
                TeesaErrorCode::DecodeFailed,
                format!("Failed to decode {} return data: {e}", self.name()),
                e,
            )
        })
    }
}

impl fmt::Display for ContractMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Source of decoded view-call results
#[async_trait]
pub trait ContractStateReader: Send + Sync {
    async fn call_view(&self, method: ContractMethod) -> TeesaResult<ContractValue>;
}

/// [`ContractStateReader`] backed by a JSON-RPC `eth_call`
pub struct RpcContractReader {
    provider: RootProvider<Http<Client>>,
    contract_address: Address,
}

impl RpcContractReader {
    #[must_use]
    pub fn new(config: &TeesaConfig) -> Self {
        Self {
            provider: ProviderBuilder::new().on_http(config.rpc_url.clone()),
            contract_address: config.contract_address,
        }
    }

}

#[async_trait]
impl ContractStateReader for RpcContractReader {
    async fn call_view(&self, method: ContractMethod) -> TeesaResult<ContractValue> {
        tracing::debug!("Calling {} on {}", method, self.contract_address);

        let tx = TransactionRequest::default()
            .with_to(self.contract_address)
            .with_input(Bytes::from(method.selector().to_vec()));

        // A JSON-RPC error payload means the node executed the call and rejected it.
        let output = self.provider.call(&tx).await.map_err(|e| {
            let code = if e.as_error_resp().is_some() {
                TeesaErrorCode::ContractRevert
            } else {
                TeesaErrorCode::NetworkError
            };
            TeesaError::with_source(code, format!("Failed to call {method}: {e}"), e)
        })?;

        method.decode(&output)
    }
}

impl std::fmt::Debug for RpcContractReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcContractReader")
            .field("contract_address", &self.contract_address)
            .finish()
    }
}

/// Read all game fields concurrently; the first failing call aborts the read.
pub async fn read_snapshot<R>(reader: &R) -> TeesaResult<ContractSnapshot>
where
    R: ContractStateReader + ?Sized,
{
    let (prize_pool, current_fee, abandoned, last_player, winner) = futures::try_join!(
        reader.call_view(ContractMethod::PrizePool),
        reader.call_view(ContractMethod::CurrentFee),
        reader.call_view(ContractMethod::AbandonedGameTimeElapsed),
        reader.call_view(ContractMethod::LastPlayerAddress),
        reader.call_view(ContractMethod::WinnerAddress),
    )?;

    Ok(ContractSnapshot {
        prize_pool: format_fixed(prize_pool.as_uint()?, DEFAULT_DECIMALS, DISPLAY_DECIMALS),
        current_fee: format_fixed(current_fee.as_uint()?, DEFAULT_DECIMALS, DISPLAY_DECIMALS),
        is_abandoned: abandoned.as_bool()?,
        last_player_address: last_player.as_address()?,
        winner_address: winner.as_address()?,
    })
}

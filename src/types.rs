//! Type definitions for the Teesa plugin
//!
//! Contract values are decoded into closed variants so callers must check which
//! kind of value a view method produced before using it.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::EMPTY_ADDRESS;
use crate::error::{TeesaError, TeesaResult};

// =============================================================================
// Contract Values
// =============================================================================

/// ABI kind of a single static return value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    Uint,
    Bool,
    Address,
}

impl fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uint => "uint256",
            Self::Bool => "bool",
            Self::Address => "address",
        };
        write!(f, "{name}")
    }
}

/// Decoded result of a view call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractValue {
    Uint(U256),
    Bool(bool),
    Address(Address),
}

impl ContractValue {
    #[must_use]
    pub const fn kind(&self) -> ReturnKind {
        match self {
            Self::Uint(_) => ReturnKind::Uint,
            Self::Bool(_) => ReturnKind::Bool,
            Self::Address(_) => ReturnKind::Address,
        }
    }

    pub fn as_uint(&self) -> TeesaResult<U256> {
        match self {
            Self::Uint(v) => Ok(*v),
            other => Err(other.mismatch(ReturnKind::Uint)),
        }
    }

    pub fn as_bool(&self) -> TeesaResult<bool> {
        match self {
            Self::Bool(v) => Ok(*v),
            other => Err(other.mismatch(ReturnKind::Bool)),
        }
    }

    pub fn as_address(&self) -> TeesaResult<Address> {
        match self {
            Self::Address(v) => Ok(*v),
            other => Err(other.mismatch(ReturnKind::Address)),
        }
    }

    fn mismatch(&self, expected: ReturnKind) -> TeesaError {
        TeesaError::decode_failed(format!(
            "Expected {expected} value, got {}",
            self.kind()
        ))
    }
}

// =============================================================================
// Game Types
// =============================================================================

/// Game contract state captured by a single provider invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSnapshot {
    /// Prize pool in ETH, 5 decimal places
    pub prize_pool: String,
    /// Fee for the next question in ETH, 5 decimal places
    pub current_fee: String,
    /// Whether the inactivity window elapsed
    pub is_abandoned: bool,
    pub last_player_address: Address,
    /// Zero address while nobody has won
    pub winner_address: Address,
}

impl ContractSnapshot {
    /// Abandoned takes precedence over Ended.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_abandoned {
            GameStatus::Abandoned
        } else if self.winner_address != EMPTY_ADDRESS {
            GameStatus::Ended
        } else {
            GameStatus::Active
        }
    }
}

/// Game status derived from a [`ContractSnapshot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Abandoned,
    Ended,
    Active,
}

impl GameStatus {
    /// Label shown on the report's `Status:` line
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Abandoned => "Abandoned due to inactivity",
            Self::Ended => "Ended",
            Self::Active => "Active",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::Abandoned, Self::Ended, Self::Active]
            .into_iter()
            .find(|status| status.label() == label.trim())
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Abandoned => "abandoned",
            Self::Ended => "ended",
            Self::Active => "active",
        };
        write!(f, "{name}")
    }
}

/// One exchange from the history service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Epoch milliseconds
    #[serde(rename = "timestamp")]
    pub timestamp_millis: i64,
    #[serde(rename = "userMessage", default)]
    pub user_message: Option<String>,
    #[serde(rename = "llmMessage")]
    pub agent_message: String,
}

// =============================================================================
// Amount Formatting
// =============================================================================

/// Format a fixed-point amount with exactly `places` fractional digits.
///
/// Digits past `places` are rounded half-up, so `1230000000000000000` with 18
/// decimals and 5 places gives `"1.23000"`.
#[must_use]
pub fn format_fixed(amount: U256, decimals: u8, places: u8) -> String {
    let places = places.min(decimals);
    let dropped = U256::from(10).pow(U256::from(decimals - places));
    let half = dropped / U256::from(2);

    let scaled = if dropped > U256::from(1) {
        amount.saturating_add(half) / dropped
    } else {
        amount
    };

    if places == 0 {
        return scaled.to_string();
    }

    let unit = U256::from(10).pow(U256::from(places));
    let integer_part = scaled / unit;
    let decimal_part = scaled % unit;
    format!(
        "{integer_part}.{:0>width$}",
        decimal_part.to_string(),
        width = places as usize
    )
}

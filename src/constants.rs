#![allow(missing_docs)]

use alloy::primitives::Address;

pub const TEESA_PROVIDER_NAME: &str = "TEESA_GAME";
pub const ENV_RPC_URL: &str = "TEESA_RPC_URL";
pub const ENV_CONTRACT_ADDRESS: &str = "TEESA_CONTRACT_ADDRESS";
pub const ENV_HISTORY_URL: &str = "TEESA_URL";
pub const MESSAGES_PATH: &str = "api/get-messages";
pub const HISTORY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const EMPTY_ADDRESS: Address = Address::ZERO;
pub const NATIVE_SYMBOL: &str = "ETH";
pub const DEFAULT_DECIMALS: u8 = 18;
pub const DISPLAY_DECIMALS: u8 = 5;
pub const AGENT_NAME: &str = "Teesa";
pub const REPORT_HEADER: &str = "-------TEESA GAME PROVIDER-------";
pub const REPORT_FOOTER: &str = "-------END OF TEESA GAME PROVIDER-------";
pub const GAME_DETAILS_HEADING: &str = "# Game Details";
pub const SUMMARY_HEADING: &str = "# Conversation Summary";

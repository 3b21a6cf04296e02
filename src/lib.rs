#![allow(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod contract;
pub mod error;
pub mod history;
pub mod providers;
pub mod report;
pub mod summarizer;
pub mod types;

pub const PLUGIN_NAME: &str = "teesa";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-exports for convenience
pub use config::TeesaConfig;
pub use contract::{read_snapshot, ContractMethod, ContractStateReader, RpcContractReader};
pub use error::{TeesaError, TeesaErrorCode, TeesaResult};
pub use history::HistoryFetcher;
pub use providers::{GameProvider, ProviderResult};
pub use report::{parse_report, render_report, ParsedReport};
pub use summarizer::{HistorySummarizer, ModelClass, ModelHandlerGenerator, TextGenerator};
pub use types::{ContractSnapshot, ContractValue, ConversationTurn, GameStatus};

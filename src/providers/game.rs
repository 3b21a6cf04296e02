//! Teesa game state provider

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::TeesaConfig;
use crate::constants::TEESA_PROVIDER_NAME;
use crate::contract::{read_snapshot, ContractStateReader, RpcContractReader};
use crate::error::TeesaResult;
use crate::history::HistoryFetcher;
use crate::report::render_report;
use crate::summarizer::{HistorySummarizer, TextGenerator};
use crate::types::GameStatus;

/// Provider result structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResult {
    /// Human-readable text
    pub text: String,
    /// Structured data
    pub data: Value,
    /// Key-value pairs
    pub values: Value,
}

impl Default for ProviderResult {
    fn default() -> Self {
        Self {
            text: String::new(),
            data: json!({}),
            values: json!({}),
        }
    }
}

/// Game provider: contract state, plus a history summary while the game runs.
pub struct GameProvider {
    contract: Arc<dyn ContractStateReader>,
    history: HistoryFetcher,
    generator: Arc<dyn TextGenerator>,
}

impl GameProvider {
    /// Provider name
    pub const NAME: &'static str = TEESA_PROVIDER_NAME;

    /// Provider description
    pub const DESCRIPTION: &'static str =
        "Teesa game status, prize pool and a summary of what players found out about the secret word";

    /// Whether this provider is dynamic
    pub const DYNAMIC: bool = true;

    /// Create a provider reading the contract over JSON-RPC.
    pub fn new(config: &TeesaConfig, generator: Arc<dyn TextGenerator>) -> TeesaResult<Self> {
        Self::with_reader(config, Arc::new(RpcContractReader::new(config)), generator)
    }

    /// Create a provider with a custom contract reader.
    pub fn with_reader(
        config: &TeesaConfig,
        contract: Arc<dyn ContractStateReader>,
        generator: Arc<dyn TextGenerator>,
    ) -> TeesaResult<Self> {
        Ok(Self {
            contract,
            history: HistoryFetcher::new(config)?,
            generator,
        })
    }

    /// Build the game report.
    ///
    /// Contract and text generation failures propagate; history failures only
    /// leave the summary without material.
    pub async fn get(&self) -> TeesaResult<ProviderResult> {
        let snapshot = read_snapshot(self.contract.as_ref()).await?;
        let status = snapshot.status();
        tracing::info!("Teesa game is {status}");

        let summary = match status {
            GameStatus::Active => {
                let history = self.history.fetch().await;
                Some(
                    HistorySummarizer::new(self.generator.as_ref())
                        .summarize(&history)
                        .await?,
                )
            }
            GameStatus::Abandoned | GameStatus::Ended => None,
        };

        let text = render_report(&snapshot, summary.as_deref().unwrap_or_default());

        Ok(ProviderResult {
            text,
            data: json!({
                "status": status,
                "contract": snapshot,
                "summary": summary,
            }),
            values: json!({
                "gameStatus": status.to_string(),
                "prizePool": snapshot.prize_pool,
                "currentFee": snapshot.current_fee,
            }),
        })
    }
}

impl std::fmt::Debug for GameProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameProvider")
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

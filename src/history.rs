//! Teesa history client
//!
//! Fetches the public conversation between players and the game host. History
//! only enriches the report, so every failure here degrades to an empty list.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::TeesaConfig;
use crate::constants::HISTORY_REQUEST_TIMEOUT_SECS;
use crate::error::{TeesaError, TeesaResult};
use crate::types::ConversationTurn;

/// Async client for the history service's message listing.
#[derive(Debug, Clone)]
pub struct HistoryFetcher {
    messages_url: Url,
    http: Client,
}

impl HistoryFetcher {
    /// Create a new history client.
    ///
    /// # Errors
    ///
    /// Returns an error if the messages URL cannot be built or the HTTP client
    /// fails to initialize.
    pub fn new(config: &TeesaConfig) -> TeesaResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HISTORY_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            messages_url: config.messages_url()?,
            http,
        })
    }

    /// Fetch all non-system turns, or an empty list if anything goes wrong.
    pub async fn fetch(&self) -> Vec<ConversationTurn> {
        match self.try_fetch().await {
            Ok(turns) => turns,
            Err(e) => {
                tracing::error!("Failed to fetch Teesa messages: {e}");
                Vec::new()
            }
        }
    }

    /// Fetch all non-system turns, propagating failures.
    pub async fn try_fetch(&self) -> TeesaResult<Vec<ConversationTurn>> {
        tracing::debug!("Fetching Teesa history from {}", self.messages_url);

        let response = self
            .http
            .get(self.messages_url.clone())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("History service answered {}", status.as_u16());
            return Err(TeesaError::network_error(format!(
                "HTTP error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.bytes().await?;
        let turns: Vec<ConversationTurn> = serde_json::from_slice(&body)?;
        tracing::debug!("Fetched {} Teesa messages", turns.len());
        Ok(turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TeesaErrorCode;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    async fn fetcher_for(response: ResponseTemplate) -> (MockServer, HistoryFetcher) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/get-messages"))
            .respond_with(response)
            .mount(&server)
            .await;

        let config = TeesaConfig::new("http://127.0.0.1:9", CONTRACT, &server.uri()).unwrap();
        let fetcher = HistoryFetcher::new(&config).unwrap();
        (server, fetcher)
    }

    #[tokio::test]
    async fn test_non_success_status_yields_empty_history() {
        let (_server, fetcher) = fetcher_for(ResponseTemplate::new(503)).await;

        assert!(fetcher.fetch().await.is_empty());

        let err = fetcher.try_fetch().await.unwrap_err();
        assert_eq!(err.code, TeesaErrorCode::NetworkError);
        assert!(err.message.contains("503"));
    }

    #[tokio::test]
    async fn test_turn_without_user_message_deserializes() {
        let body = serde_json::json!([
            { "id": "7", "userId": "u1", "timestamp": 1_736_953_445_000_i64, "llmMessage": "Welcome!" }
        ]);
        let (_server, fetcher) = fetcher_for(ResponseTemplate::new(200).set_body_json(body)).await;

        let turns = fetcher.try_fetch().await.unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].id, "7");
        assert!(turns[0].user_message.is_none());
        assert_eq!(turns[0].agent_message, "Welcome!");
    }
}

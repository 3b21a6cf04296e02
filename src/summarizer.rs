#![allow(missing_docs)]
//! Conversation summarization through the agent's text model

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use serde_json::json;

use crate::constants::AGENT_NAME;
use crate::error::{TeesaError, TeesaResult};
use crate::types::ConversationTurn;

pub const SUMMARIZE_HISTORY_TEMPLATE: &str = r#"
# Task: Summarize the given conversation between users and a word guessing game host Teesa.
The conversation is:
{{messages}}

# Instructions:
The users either ask yes/no questions about the secret word or they try to guess it.
Summarize all the details that the users found about the secret word.
Just generate the summary, do not include any other clarification or explanation."#;

/// Model tier requested from the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelClass {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModelClass {
    /// Runtime model type handling this tier
    #[must_use]
    pub const fn model_type(&self) -> &'static str {
        match self {
            Self::Small => "TEXT_SMALL",
            Self::Medium | Self::Large => "TEXT_LARGE",
        }
    }
}

/// Text completion capability supplied by the agent runtime
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str, model_class: ModelClass) -> TeesaResult<String>;
}

/// Model handler shape used by the elizaOS runtime's `register_model`.
pub type ModelHandler = Box<
    dyn Fn(serde_json::Value) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send>>
        + Send
        + Sync,
>;

/// Adapts a runtime model handler to [`TextGenerator`].
pub struct ModelHandlerGenerator {
    handler: ModelHandler,
}

impl ModelHandlerGenerator {
    #[must_use]
    pub fn new(handler: ModelHandler) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl TextGenerator for ModelHandlerGenerator {
    async fn generate_text(&self, prompt: &str, model_class: ModelClass) -> TeesaResult<String> {
        let params = json!({
            "prompt": prompt,
            "modelType": model_class.model_type(),
        });

        (self.handler)(params).await.map_err(|e| {
            TeesaError::generation_failed(format!(
                "{} generation failed: {e:#}",
                model_class.model_type()
            ))
        })
    }
}

/// Render a turn's timestamp like `1/15/2025, 3:04:05 PM` in `tz`, or
/// `Invalid Date` when it is out of range.
#[must_use]
pub fn format_timestamp<Tz>(timestamp_millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(timestamp_millis) {
        Some(utc) => utc
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => "Invalid Date".to_string(),
    }
}

#[must_use]
pub fn render_turn<Tz>(turn: &ConversationTurn, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = format!("{}\n", format_timestamp(turn.timestamp_millis, tz));
    if let Some(message) = turn.user_message.as_deref().filter(|m| !m.is_empty()) {
        out.push_str(&format!("User {}: {}\n", turn.user_id, message));
    }
    out.push_str(&format!("{AGENT_NAME}: {}", turn.agent_message));
    out
}

#[must_use]
pub fn render_transcript<Tz>(history: &[ConversationTurn], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    history
        .iter()
        .map(|turn| render_turn(turn, tz))
        .collect::<Vec<String>>()
        .join("\n\n")
}

#[must_use]
pub fn build_summary_prompt(transcript: &str) -> String {
    SUMMARIZE_HISTORY_TEMPLATE.replace("{{messages}}", transcript)
}

/// Summarizes Teesa history with a [`TextGenerator`]. The model's output is
/// returned untouched.
pub struct HistorySummarizer<'a> {
    generator: &'a dyn TextGenerator,
    model_class: ModelClass,
}

impl<'a> HistorySummarizer<'a> {
    #[must_use]
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self {
            generator,
            model_class: ModelClass::Medium,
        }
    }

    pub async fn summarize(&self, history: &[ConversationTurn]) -> TeesaResult<String> {
        let prompt = build_summary_prompt(&render_transcript(history, &Local));
        tracing::debug!("Summarizing {} Teesa messages", history.len());
        self.generator.generate_text(&prompt, self.model_class).await
    }
}

// src/services/oracle.rs
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::message::ConversationTurn;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Error code: {} - {body}", .status.as_u16())]
    Status { status: StatusCode, body: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Sampling settings fixed per endpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Outbound chat-completions payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ConversationTurn>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        messages: Vec<ConversationTurn>,
        params: SamplingParams,
    ) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }
}

/// A text-completion provider. The credential comes from the caller on
/// every request, so implementations must not hold one.
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    /// Model identifier placed in every [`CompletionRequest`].
    fn model(&self) -> &str;

    async fn complete(
        &self,
        credential: &str,
        request: CompletionRequest,
    ) -> Result<String, OracleError>;
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible `/chat/completions` client.
#[derive(Clone, Debug)]
pub struct OpenAiOracle {
    http: Client,
    base_url: String,
    model: String,
}

impl OpenAiOracle {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OracleError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionOracle for OpenAiOracle {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        credential: &str,
        request: CompletionRequest,
    ) -> Result<String, OracleError> {
        let started = Instant::now();
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(credential)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status { status, body });
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| OracleError::MalformedResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| OracleError::MalformedResponse("no choices returned".into()))?
            .message
            .content
            .unwrap_or_default();

        tracing::debug!(
            model = %request.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            chars = content.chars().count(),
            "completion received"
        );
        Ok(content)
    }
}

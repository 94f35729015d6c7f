// src/services/chatbot.rs
use std::time::Instant;

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    message::{ChatRequest, ConversationTurn, TextRequest},
    prompts::{FURIGANA_PROMPT, PromptTemplateSet, TRANSLATE_PROMPT},
    services::oracle::{CompletionOracle, CompletionRequest, SamplingParams},
};

/// Number of prior turns forwarded with each chat message.
pub const HISTORY_WINDOW: usize = 10;

pub const CHAT_PARAMS: SamplingParams = SamplingParams {
    temperature: 0.8,
    max_tokens: 1000,
};
pub const TRANSLATE_PARAMS: SamplingParams = SamplingParams {
    temperature: 0.3,
    max_tokens: 500,
};
pub const FURIGANA_PARAMS: SamplingParams = SamplingParams {
    temperature: 0.1,
    max_tokens: 500,
};

/// The last `HISTORY_WINDOW` entries, oldest first. Earlier entries are dropped.
pub fn window_history<T>(history: &[T]) -> &[T] {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    &history[start..]
}

/// System instruction, the history window, then the new user message.
///
/// Only turns inside the window are parsed; anything older is dropped
/// without being looked at.
pub fn build_chat_messages(
    templates: &PromptTemplateSet,
    req: &ChatRequest,
) -> AppResult<Vec<ConversationTurn>> {
    let window = window_history(&req.history);
    let offset = req.history.len() - window.len();

    let mut messages = Vec::with_capacity(window.len() + 2);
    messages.push(ConversationTurn::system(templates.compose_system_instruction(
        &req.partner_name,
        &req.difficulty,
        &req.topic,
    )));
    for (i, raw) in window.iter().enumerate() {
        messages.push(parse_turn(raw, offset + i)?);
    }
    messages.push(ConversationTurn::user(req.message.as_str()));
    Ok(messages)
}

fn parse_turn(raw: &Value, index: usize) -> AppResult<ConversationTurn> {
    ConversationTurn::deserialize(raw)
        .map_err(|e| AppError::InvalidRequest(format!("history[{index}]: {e}")))
}

fn require_api_key(api_key: &str) -> AppResult<()> {
    if api_key.is_empty() {
        return Err(AppError::missing_api_key());
    }
    Ok(())
}

async fn ask(
    oracle: &dyn CompletionOracle,
    api_key: &str,
    messages: Vec<ConversationTurn>,
    params: SamplingParams,
) -> AppResult<String> {
    let started = Instant::now();
    let request = CompletionRequest::new(oracle.model(), messages, params);
    let reply = oracle.complete(api_key, request).await?;
    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "oracle replied");
    Ok(reply)
}

/// Conversation partner reply for one chat turn.
pub async fn generate_reply(
    oracle: &dyn CompletionOracle,
    templates: &PromptTemplateSet,
    req: &ChatRequest,
) -> AppResult<String> {
    require_api_key(&req.api_key)?;

    let messages = build_chat_messages(templates, req)?;
    tracing::info!(
        difficulty = %req.difficulty,
        topic = %req.topic,
        history = req.history.len(),
        forwarded = messages.len() - 2,
        "chat turn"
    );
    ask(oracle, &req.api_key, messages, CHAT_PARAMS).await
}

/// Japanese to Korean translation.
pub async fn translate(oracle: &dyn CompletionOracle, req: &TextRequest) -> AppResult<String> {
    require_api_key(&req.api_key)?;

    tracing::info!(chars = req.text.chars().count(), "translate");
    let messages = vec![
        ConversationTurn::system(TRANSLATE_PROMPT),
        ConversationTurn::user(req.text.as_str()),
    ];
    ask(oracle, &req.api_key, messages, TRANSLATE_PARAMS).await
}

/// Inline `Kanji(reading)` annotation of a Japanese sentence.
pub async fn annotate_readings(
    oracle: &dyn CompletionOracle,
    req: &TextRequest,
) -> AppResult<String> {
    require_api_key(&req.api_key)?;

    tracing::info!(chars = req.text.chars().count(), "furigana");
    let messages = vec![
        ConversationTurn::system(FURIGANA_PROMPT),
        ConversationTurn::user(req.text.as_str()),
    ];
    ask(oracle, &req.api_key, messages, FURIGANA_PARAMS).await
}

use axum::{Json, extract::State};

use super::ApiJson;
use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, FuriganaResponse, TextRequest, TranslateResponse},
    services::chatbot::{annotate_readings, generate_reply, translate},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = generate_reply(state.oracle.as_ref(), state.templates, &payload).await?;
    Ok(Json(ChatResponse { response }))
}

pub async fn translate_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<TextRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    let translation = translate(state.oracle.as_ref(), &payload).await?;
    Ok(Json(TranslateResponse { translation }))
}

pub async fn furigana_handler(
    State(state): State<SharedState>,
    ApiJson(payload): ApiJson<TextRequest>,
) -> Result<Json<FuriganaResponse>, AppError> {
    let furigana = annotate_readings(state.oracle.as_ref(), &payload).await?;
    Ok(Json(FuriganaResponse { furigana }))
}

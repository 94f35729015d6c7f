#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{Router, response::Response};
use nihongo_chat::routes::create_router;
use nihongo_chat::services::oracle::{CompletionOracle, CompletionRequest, OracleError};
use nihongo_chat::state::AppState;

pub enum Behavior {
    Reply(String),
    /// Replies with the character count of the system instruction.
    EchoSystemLength,
    Fail { status: StatusCode, body: String },
}

/// Records every call and answers according to `behavior`.
pub struct StubOracle {
    behavior: Behavior,
    pub calls: Mutex<Vec<(String, CompletionRequest)>>,
}

impl StubOracle {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Behavior::Reply(text.to_string()))
    }

    pub fn failing(status: StatusCode, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(Behavior::Fail { status, body })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> (String, CompletionRequest) {
        let calls = self.calls.lock().unwrap();
        calls.last().cloned().expect("oracle was never called")
    }
}

#[async_trait]
impl CompletionOracle for StubOracle {
    fn model(&self) -> &str {
        "stub-model"
    }

    async fn complete(
        &self,
        credential: &str,
        request: CompletionRequest,
    ) -> Result<String, OracleError> {
        let system_len = request.messages[0].content.chars().count();
        self.calls
            .lock()
            .unwrap()
            .push((credential.to_string(), request));
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::EchoSystemLength => Ok(system_len.to_string()),
            Behavior::Fail { status, body } => Err(OracleError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

pub fn app(oracle: Arc<StubOracle>) -> Router {
    let state = Arc::new(AppState::new(oracle));
    create_router("static").with_state(state)
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

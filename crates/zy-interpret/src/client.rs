//! Chat-completions client for interpretation.
//!
//! The [`Interpreter`] trait is the narrow capability the rest of the system
//! sees: send one prompt, receive text or a failure. [`DeepSeekClient`] is
//! the concrete implementation against the DeepSeek OpenAI-compatible
//! endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::InterpretError;
use crate::prompt::SYSTEM_PROMPT;

/// Default chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.deepseek.com/chat/completions";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "deepseek-chat";
/// Environment variable holding the API key.
pub const AUTH_ENV_VAR: &str = "DEEPSEEK_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_TEMPERATURE: f32 = 0.7;
const MAX_ERROR_BODY_CHARS: usize = 320;

/// Capability interface for external interpretation.
///
/// One outstanding call at a time per session; abandoning the session simply
/// drops the pending future.
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Send a prompt and await generated prose.
    async fn interpret(&self, prompt: &str) -> Result<String, InterpretError>;
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Client for the DeepSeek chat-completions API.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
}

impl DeepSeekClient {
    /// Create a client with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, InterpretError> {
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    /// Create a client reading the API key from `DEEPSEEK_API_KEY`.
    pub fn from_env() -> Result<Self, InterpretError> {
        let key = std::env::var(AUTH_ENV_VAR).map_err(|_| InterpretError::MissingApiKey)?;
        if key.trim().is_empty() {
            return Err(InterpretError::MissingApiKey);
        }
        Self::new(key)
    }

    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The model this client will request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Interpreter for DeepSeekClient {
    async fn interpret(&self, prompt: &str) -> Result<String, InterpretError> {
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
            temperature: self.temperature,
        };

        debug!(model = %self.model, endpoint = %self.endpoint, "sending interpretation request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "interpretation service rejected the request");
            return Err(InterpretError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| InterpretError::MalformedResponse(e.to_string()))?;

        let choice = body
            .choices
            .first()
            .ok_or_else(|| InterpretError::MalformedResponse("response has no choices".into()))?;

        Ok(choice.message.content.trim().to_string())
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}

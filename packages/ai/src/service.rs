// ABOUTME: AI service for text-generation calls to an OpenAI-compatible chat endpoint
// ABOUTME: Handles API requests, response extraction, and the TextGenerator seam used by the pipeline

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";
const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum AIServiceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("No API key configured")]
    NoApiKey,

    #[error("Invalid response format")]
    InvalidResponse,
}

pub type AIServiceResult<T> = Result<T, AIServiceError>;

/// Anything that turns a prompt into reply text.
///
/// The summarizer only depends on this trait so tests can count or script
/// generation calls without a network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: String) -> AIServiceResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl Usage {
    pub fn total_tokens(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

#[derive(Debug)]
pub struct AIResponse<T> {
    pub data: T,
    pub usage: Usage,
}

/// Connection settings for [`AIService`]
#[derive(Debug, Clone)]
pub struct AIServiceConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for AIServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// AI service for README summarization calls
pub struct AIService {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl AIService {
    pub fn new(config: AIServiceConfig) -> AIServiceResult<Self> {
        if config.api_key.is_none() {
            info!("OPENAI_API_KEY not set - summary generation will fail");
        }
        if config.model != DEFAULT_MODEL {
            info!("Using custom generation model: {}", config.model);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new AI service instance with a specific API key
    pub fn with_api_key(api_key: String) -> AIServiceResult<Self> {
        Self::new(AIServiceConfig {
            api_key: Some(api_key),
            ..AIServiceConfig::default()
        })
    }

    /// Get the model being used by this service
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a text generation call and returns the first choice's content
    pub async fn generate_text(&self, prompt: String) -> AIServiceResult<AIResponse<String>> {
        let api_key = self.api_key.as_ref().ok_or(AIServiceError::NoApiKey)?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: Some(prompt),
            }],
            temperature: DEFAULT_TEMPERATURE,
        };

        info!("Making chat completion request: model={}", request.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!("Generation request timed out");
                    AIServiceError::ApiError("Request timed out".to_string())
                } else if e.is_connect() {
                    error!("Failed to connect to generation service: {}", e);
                    AIServiceError::ApiError(format!("Connection failed: {}", e))
                } else {
                    error!("Generation request failed: {}", e);
                    AIServiceError::RequestFailed(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Generation API error: {} - {}", status, error_text);
            return Err(AIServiceError::ApiError(format!(
                "API returned {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AIServiceError::ParseError(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AIServiceError::InvalidResponse)?;

        Ok(AIResponse {
            data: text,
            usage: completion.usage.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl TextGenerator for AIService {
    async fn complete(&self, prompt: String) -> AIServiceResult<String> {
        let response = self.generate_text(prompt).await?;
        info!(
            "Generation used {} tokens",
            response.usage.total_tokens()
        );
        Ok(response.data)
    }
}

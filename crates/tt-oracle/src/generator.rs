//! Reading generation.
//!
//! [`ReadingGenerator`] is the seam between a reading session and the text
//! service. Implementations never fail: any error comes back as text starting
//! with [`ERROR_PREFIX`] and is logged like any other reading.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ReaderConfig;

/// Prefix of the text returned when generation fails.
pub const ERROR_PREFIX: &str = "Error generating reading: ";

/// System instructions sent with every request.
pub const SYSTEM_PROMPT: &str = "You are a tarot card reader that provides supportive, concise, and easy-to-understand readings. Focus specifically on answering the user's question using the symbolism of the drawn cards. Provide interpretations that are both meaningful and practical. In 3 sentences or less.";

/// Produces the narrative for a question and a set of drawn cards.
pub trait ReadingGenerator {
    /// Generate a reading. Never fails; errors are returned as
    /// `"Error generating reading: <message>"`.
    fn generate(&self, question: &str, cards: &[String]) -> String;
}

impl<F> ReadingGenerator for F
where
    F: Fn(&str, &[String]) -> String,
{
    fn generate(&self, question: &str, cards: &[String]) -> String {
        self(question, cards)
    }
}

/// Build the user prompt for a reading.
pub fn build_prompt(question: &str, cards: &[String]) -> String {
    format!(
        "I have drawn the following tarot cards: {}. The focus question is: '{question}'. \
         Please provide a fun, insightful, and easy-to-understand tarot reading that interprets these cards.",
        cards.join(", ")
    )
}

/// Format a failure the way it is stored in the log.
pub fn error_text(err: &impl std::fmt::Display) -> String {
    format!("{ERROR_PREFIX}{err}")
}

/// Internal failures of the chat-completions client.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key configured.
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    /// Transport or HTTP status failure.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response had no usable text.
    #[error("the response contained no reading")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Pull the first choice's text out of a chat-completions response body.
pub fn extract_reading(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(GenerationError::EmptyResponse)
}

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    config: ReaderConfig,
}

impl OpenAiGenerator {
    /// Create a generator from the reading configuration.
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Perform the request, surfacing failures as errors.
    pub fn try_generate(&self, question: &str, cards: &[String]) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(question, cards),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()?;

        debug!(model = %self.config.model, endpoint = %self.endpoint(), "requesting reading");
        let body = client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()?
            .error_for_status()?
            .text()?;

        extract_reading(&body)
    }
}

impl ReadingGenerator for OpenAiGenerator {
    fn generate(&self, question: &str, cards: &[String]) -> String {
        match self.try_generate(question, cards) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "reading generation failed");
                error_text(&err)
            }
        }
    }
}

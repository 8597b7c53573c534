use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::models::{itinerary::ItineraryMatch, search::ItineraryQuery};

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const COMPLETION_MODEL: &str = "openai/gpt-3.5-turbo";
const COMPLETION_MAX_TOKENS: u32 = 150;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Returned to the caller whenever the completion API cannot produce a
/// recommendation; the filtered itineraries are still served.
pub const FALLBACK_RECOMMENDATION: &str =
    "Unable to generate an AI recommendation right now, please try again later";

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug)]
pub enum RecommendationError {
    ConfigurationError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
}

impl fmt::Display for RecommendationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationError::ConfigurationError(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            RecommendationError::HttpError(err) => write!(f, "HTTP error: {}", err),
            RecommendationError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for RecommendationError {}

impl From<reqwest::Error> for RecommendationError {
    fn from(err: reqwest::Error) -> Self {
        RecommendationError::HttpError(err)
    }
}

#[derive(Clone)]
pub struct RecommendationService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl RecommendationService {
    /// Fails with a configuration error when OPENROUTER_API_KEY is not set;
    /// callers resolve this before touching the store.
    pub fn from_env() -> Result<Self, RecommendationError> {
        let api_key = env::var("OPENROUTER_API_KEY").map_err(|_| {
            RecommendationError::ConfigurationError("OPENROUTER_API_KEY not set".to_string())
        })?;

        let api_url =
            env::var("OPENROUTER_API_URL").unwrap_or_else(|_| OPENROUTER_API_URL.to_string());

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RecommendationError::HttpError)?;

        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Asks the completion API for a short justification picking the best
    /// fit among `rows`. Timeouts surface as `HttpError` like any other
    /// transport failure.
    pub async fn recommend(
        &self,
        params: &ItineraryQuery,
        month: i64,
        rows: &[ItineraryMatch],
    ) -> Result<String, RecommendationError> {
        let request = ChatCompletionRequest {
            model: COMPLETION_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(params, month, rows),
            }],
            max_tokens: COMPLETION_MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RecommendationError::ResponseError(format!(
                "Completion request failed with status {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            RecommendationError::ResponseError(format!("Failed to parse response: {}", e))
        })?;

        completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                RecommendationError::ResponseError("Completion returned no choices".to_string())
            })
    }
}

/// Enumerates the matching itineraries 1-indexed together with the stated
/// preferences, so the same input always produces the same prompt.
pub fn build_prompt(params: &ItineraryQuery, month: i64, rows: &[ItineraryMatch]) -> String {
    let preferences = if params.preferences.is_empty() {
        "no particular preference".to_string()
    } else {
        params.preferences.join(", ")
    };

    let listing = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            format!(
                "{}. {} (rating: {}, price: NT${}, temperature: {}°C)",
                index + 1,
                row.itinerary_name,
                row.rating,
                row.min_price,
                row.average_temperature
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "The user wants to travel to {} in month {}. Preferences: {}.\n\
         These itineraries match the criteria:\n\
         {}\n\
         Recommend the one that best fits the preferences and briefly explain why (50-100 words).",
        params.city, month, preferences, listing
    )
}

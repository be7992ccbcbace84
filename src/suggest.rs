//! "Stuck?" suggestions from an AI mentor
//!
//! A [`SuggestionProvider`] produces one short micro-challenge for the
//! learner. Without an API key the built-in [`FallbackSuggestions`] is used;
//! with one, [`GeminiSuggestions`] makes a single `generateContent` call.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

use crate::store::UserStats;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
}

impl Suggestion {
    /// Served when no AI backend is configured
    pub fn micro_challenge() -> Self {
        Self {
            title: "Micro-Reto: CSS Flexbox".to_string(),
            description: "Intenta centrar un div vertical y horizontalmente en 2 minutos sin mirar la documentación.".to_string(),
        }
    }

    /// Served when the AI backend could not be reached
    pub fn connection_error() -> Self {
        Self {
            title: "Error de conexión".to_string(),
            description: "No pude contactar con tu mentor virtual. Revisa la consola.".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider returned {status}: {message}")]
    Provider { status: u16, message: String },
}

#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// `Ok(None)` when the provider answered with nothing usable
    async fn suggest(&self, user: &UserStats) -> Result<Option<Suggestion>, SuggestionError>;

    fn name(&self) -> &'static str;
}

/// Ask `provider`, replacing any failure with the connection-error card
pub async fn suggest_or_apologize(
    provider: &dyn SuggestionProvider,
    user: &UserStats,
) -> Option<Suggestion> {
    match provider.suggest(user).await {
        Ok(suggestion) => suggestion,
        Err(e) => {
            error!(provider = provider.name(), error = %e, "Error getting AI suggestion");
            Some(Suggestion::connection_error())
        }
    }
}

/// Always answers with the canned micro-challenge
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSuggestions;

#[async_trait]
impl SuggestionProvider for FallbackSuggestions {
    async fn suggest(&self, _user: &UserStats) -> Result<Option<Suggestion>, SuggestionError> {
        Ok(Some(Suggestion::micro_challenge()))
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

/// Mentor prompt for `user`
pub fn build_prompt(user: &UserStats) -> String {
    format!(
        "Eres un mentor de programación experto. El usuario se llama {} y está estudiando para ser Fullstack JS.\n\
         Su nivel es {}. Está bloqueado o aburrido.\n\
         Dame una sugerencia muy breve (máximo 2 frases) de algo que pueda hacer ahora mismo que sea:\n\
         1. Un micro-aprendizaje (5 min).\n\
         2. O un reto divertido de código.\n\
         Responde en formato JSON: {{ \"title\": \"...\", \"description\": \"...\" }}",
        user.name, user.level
    )
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

/// Gemini `generateContent` backed provider
pub struct GeminiSuggestions {
    config: GeminiConfig,
    client: Client,
}

impl GeminiSuggestions {
    pub fn new(config: GeminiConfig) -> Result<Self, SuggestionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl SuggestionProvider for GeminiSuggestions {
    async fn suggest(&self, user: &UserStats) -> Result<Option<Suggestion>, SuggestionError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(user) }] }],
            "generationConfig": { "responseMimeType": "application/json" },
        });

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SuggestionError::Provider { status, message });
        }

        let generated: GenerateResponse = response.json().await?;
        let Some(text) = generated.first_text() else {
            debug!(model = %self.config.model, "AI response had no text");
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(text)?))
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

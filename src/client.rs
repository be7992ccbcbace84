//! Typed client for the StudyForge API
//!
//! Each call issues exactly one request. No retries and no caching.
//!
//! ```rust,no_run
//! use studyforge::client::{ApiClient, ClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ClientConfig::default())?;
//! let dashboard = client.fetch_dashboard().await?;
//! println!("{} has {} gems", dashboard.user.name, dashboard.user.gems);
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::routes::{HealthResponse, StatusUpdate};
use crate::store::{DashboardSnapshot, NodeStatus, SkillNode, SkillTreeData, TreeSummary};
use crate::suggest::Suggestion;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the `/api` prefix
    pub base_url: String,
    /// No timeout when `None`
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

pub struct ApiClient {
    config: ClientConfig,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot> {
        let response = self.client.get(self.url("/dashboard")).send().await?;
        self.handle_response(response).await
    }

    pub async fn fetch_skill_tree(&self, tree_id: &str) -> Result<SkillTreeData> {
        let url = self.url(&format!("/skill-tree/{}", tree_id));
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    pub async fn fetch_available_trees(&self) -> Result<Vec<TreeSummary>> {
        let response = self
            .client
            .get(self.url("/skill-tree/available"))
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn update_node_status(
        &self,
        tree_id: &str,
        node_id: &str,
        status: NodeStatus,
    ) -> Result<SkillNode> {
        let url = self.url(&format!("/skill-tree/{}/nodes/{}", tree_id, node_id));
        let response = self
            .client
            .patch(url)
            .json(&StatusUpdate {
                status: Some(status),
            })
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response).await
    }

    pub async fn fetch_suggestion(&self) -> Result<Option<Suggestion>> {
        let response = self.client.get(self.url("/suggestion")).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if response.status() == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::NotFound(error_message(&body)));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status,
                message: error_message(&body),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Pull `error` out of a `{"error": ...}` body, else the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<crate::error::ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"error":"Node not found"}"#), "Node not found");
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::new(ClientConfig {
            base_url: "http://127.0.0.1:9/api/".to_string(),
            timeout_secs: Some(1),
        })
        .unwrap();
        assert_eq!(client.url("/health"), "http://127.0.0.1:9/api/health");
    }
}

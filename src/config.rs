//! Configuration for studyforge
//!
//! CLI arguments and environment variable handling using clap.
//! A `.env` file is loaded by `main` before parsing.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Learning-progress dashboard API server
#[derive(Parser, Debug, Clone)]
#[command(name = "studyforge")]
#[command(about = "Learning-progress dashboard API with in-memory seed data")]
pub struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// API key for the external AI suggestion service.
    /// When absent, a built-in suggestion is served instead.
    #[arg(long, env = "API_KEY")]
    pub api_key: Option<String>,

    /// Model used for AI suggestions
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    /// Timeout for the AI suggestion call in seconds
    #[arg(long, env = "AI_TIMEOUT_SECS", default_value = "15")]
    pub ai_timeout_secs: u64,

    /// Return 404 for unknown skill-tree ids instead of serving the default tree
    #[arg(long, env = "STRICT_TREE_IDS", default_value = "false")]
    pub strict_tree_ids: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            port: 3000,
            host: IpAddr::from([0, 0, 0, 0]),
            api_key: None,
            gemini_model: "gemini-2.5-flash".to_string(),
            ai_timeout_secs: 15,
            strict_tree_ids: false,
            log_level: "info".to_string(),
        }
    }
}

impl Args {
    /// Socket address the server binds to
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// API key with blank values treated as absent
    pub fn ai_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(format!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LEVELS.join(", "),
                self.log_level
            ));
        }

        if self.ai_timeout_secs == 0 {
            return Err("AI_TIMEOUT_SECS must be greater than zero".to_string());
        }

        if self.gemini_model.trim().is_empty() {
            return Err("GEMINI_MODEL must not be empty".to_string());
        }

        Ok(())
    }
}

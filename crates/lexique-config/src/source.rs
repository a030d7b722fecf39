use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:3000/data";

/// Where the static JSON datasets are served from.
#[derive(Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL the dataset files hang off of (no trailing slash)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl SourceConfig {
    pub fn new() -> Self {
        let base_url = env::var("LEXIQUE_DATA_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("LEXIQUE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            timeout_secs,
        }
    }

    pub fn resource_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url, file_name)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Recommender configuration.
//!
//! Every field has a default, so a config file only needs to name what
//! it changes.

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

/// Deployment-level settings for the recommendation service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Platform every request is pinned to
    pub platform: String,
    /// Largest `limit` a request may ask for
    pub max_limit: usize,
    /// `limit` used when a request does not give one
    pub default_limit: usize,
    /// Entries fetched from the catalog source per request
    pub page_size: usize,
    /// `max_duration` used when a request does not give one, in hours
    pub default_max_duration: f32,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            platform: "playstation5".to_string(),
            max_limit: 50,
            default_limit: 10,
            page_size: 40,
            default_max_duration: 100.0,
        }
    }
}

impl RecommenderConfig {
    /// Load a JSON config file, filling missing fields with defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.platform.trim().is_empty(), "platform must not be empty");
        ensure!(self.max_limit > 0, "max_limit must be positive");
        ensure!(
            self.default_limit <= self.max_limit,
            "default_limit {} exceeds max_limit {}",
            self.default_limit,
            self.max_limit
        );
        ensure!(self.page_size > 0, "page_size must be positive");
        ensure!(
            self.default_max_duration.is_finite() && self.default_max_duration > 0.0,
            "default_max_duration must be a positive number of hours"
        );
        Ok(())
    }
}

//! HhAreaDirectory -- concrete [`AreaDirectory`] implementation.
//!
//! Resolving one city name means fetching the full hierarchical area tree
//! and walking it depth-first for a case-insensitive exact name match. The
//! fetch is one-shot with no caching across lookups; it only happens when a
//! user types a city outside the popular list, which is rare enough that
//! correctness beats cleverness here.

use std::time::Duration;

use jobhound_core::search::AreaDirectory;
use jobhound_types::config::JobhoundConfig;
use jobhound_types::error::SearchApiError;

use super::types::AreaNode;
use super::USER_AGENT;

/// HH.ru area-directory client.
#[derive(Debug, Clone)]
pub struct HhAreaDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HhAreaDirectory {
    pub fn new(config: &JobhoundConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.hh_base_url.clone(),
        }
    }

    /// Override the base URL (useful for tests against a local server).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

/// Depth-first search for a case-insensitive exact name match.
fn find_area(nodes: &[AreaNode], name_lower: &str) -> Option<String> {
    for node in nodes {
        if node.name.to_lowercase() == name_lower {
            return Some(node.id.clone());
        }
        if let Some(id) = find_area(&node.areas, name_lower) {
            return Some(id);
        }
    }
    None
}

impl AreaDirectory for HhAreaDirectory {
    async fn resolve_city(&self, name: &str) -> Result<Option<String>, SearchApiError> {
        let url = format!("{}/areas", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchApiError::Transport(format!("HTTP {status}")));
        }

        let tree: Vec<AreaNode> = response
            .json()
            .await
            .map_err(|e| SearchApiError::Payload(e.to_string()))?;

        Ok(find_area(&tree, &name.to_lowercase()))
    }
}

//! HhClient -- concrete [`VacancySearch`] implementation for the HH.ru
//! vacancies API.
//!
//! One read-only GET per search, bounded by the configured timeout. Network
//! and status failures map to [`SearchApiError::Transport`], undecodable
//! bodies to [`SearchApiError::Payload`]; neither is retried.

use std::time::Duration;

use jobhound_core::search::{VacancyQuery, VacancySearch};
use jobhound_types::config::JobhoundConfig;
use jobhound_types::error::SearchApiError;
use jobhound_types::listing::Listing;

use super::types::VacanciesPage;
use super::USER_AGENT;

/// HH.ru vacancy search client.
#[derive(Debug, Clone)]
pub struct HhClient {
    client: reqwest::Client,
    base_url: String,
}

impl HhClient {
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

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl VacancySearch for HhClient {
    async fn search(&self, query: &VacancyQuery) -> Result<Vec<Listing>, SearchApiError> {
        let url = self.url("/vacancies");

        let response = self
            .client
            .get(&url)
            .query(query.params())
            .send()
            .await
            .map_err(|e| SearchApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchApiError::Transport(format!("HTTP {status}: {body}")));
        }

        let page: VacanciesPage = response
            .json()
            .await
            .map_err(|e| SearchApiError::Payload(e.to_string()))?;

        tracing::debug!(count = page.items.len(), "vacancy search returned");
        Ok(page.items.into_iter().map(Listing::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = HhClient::new(&JobhoundConfig::default())
            .with_base_url("http://localhost:9100".to_string());
        assert_eq!(client.url("/vacancies"), "http://localhost:9100/vacancies");
    }

    #[test]
    fn test_default_base_url_from_config() {
        let client = HhClient::new(&JobhoundConfig::default());
        assert_eq!(client.url("/vacancies"), "https://api.hh.ru/vacancies");
    }
}

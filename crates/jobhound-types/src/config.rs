//! Runtime configuration for jobhound.
//!
//! Deserialized from `config.toml` in the data directory; every field has a
//! default so a missing or partial file still yields a working config.

use serde::{Deserialize, Serialize};

fn default_hh_base_url() -> String {
    "https://api.hh.ru".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_page_size() -> u32 {
    10
}

fn default_poll_timeout_secs() -> u64 {
    30
}

/// Global configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobhoundConfig {
    /// Base URL of the job-search API.
    #[serde(default = "default_hh_base_url")]
    pub hh_base_url: String,

    /// Timeout for each outbound job-search / area-directory request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Listings requested per search (first page only).
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Long-poll timeout for the update loop.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

impl Default for JobhoundConfig {
    fn default() -> Self {
        Self {
            hh_base_url: default_hh_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            page_size: default_page_size(),
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }
}

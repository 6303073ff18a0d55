//! Application state wiring the concrete clients into the engine.
//!
//! The dialogue engine is generic over the search and area-directory ports;
//! AppState pins it to the reqwest-backed HH.ru implementations.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use jobhound_core::dialogue::DialogueEngine;
use jobhound_infra::config::{load_config, resolve_data_dir};
use jobhound_infra::hh::{HhAreaDirectory, HhClient};
use jobhound_infra::telegram::TelegramClient;
use jobhound_types::config::JobhoundConfig;

/// The engine pinned to the production port implementations.
pub type ConcreteEngine = DialogueEngine<HhClient, HhAreaDirectory>;

/// Shared application state for the runner.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConcreteEngine>,
    pub telegram: Arc<TelegramClient>,
    pub config: JobhoundConfig,
}

impl AppState {
    /// Load config and wire the clients.
    pub async fn init(token: SecretString, data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or_else(resolve_data_dir);
        let config = load_config(&data_dir).await;
        tracing::debug!(?config, data_dir = %data_dir.display(), "configuration loaded");

        let engine = DialogueEngine::new(
            HhClient::new(&config),
            HhAreaDirectory::new(&config),
            config.page_size,
        );
        let telegram = TelegramClient::new(token, config.poll_timeout_secs);

        Ok(Self {
            engine: Arc::new(engine),
            telegram: Arc::new(telegram),
            config,
        })
    }
}

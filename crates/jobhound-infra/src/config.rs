//! Configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.jobhound/` by default)
//! and deserializes it into [`JobhoundConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::{Path, PathBuf};

use jobhound_types::config::JobhoundConfig;

/// Resolve the data directory: `JOBHOUND_DATA_DIR` env override, else
/// `~/.jobhound`, else `./.jobhound` when no home directory exists.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JOBHOUND_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".jobhound"))
        .unwrap_or_else(|| PathBuf::from(".jobhound"))
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: defaults, logged at debug.
/// - Unreadable or unparsable file: defaults, logged at warn.
pub async fn load_config(data_dir: &Path) -> JobhoundConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml at {}, using defaults", config_path.display());
            return JobhoundConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return JobhoundConfig::default();
        }
    };

    match toml::from_str::<JobhoundConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            JobhoundConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, JobhoundConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
hh_base_url = "http://localhost:9100"
page_size = 5
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.hh_base_url, "http://localhost:9100");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, JobhoundConfig::default());
    }
}

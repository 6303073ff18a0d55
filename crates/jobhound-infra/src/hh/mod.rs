//! HH.ru API clients: vacancy search and the area directory.

pub mod areas;
pub mod client;
pub mod types;

pub use areas::HhAreaDirectory;
pub use client::HhClient;

/// Browser-like User-Agent the HH.ru API expects on anonymous requests.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

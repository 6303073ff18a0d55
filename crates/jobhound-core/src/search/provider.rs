//! Port traits for the external job-search and city-directory APIs.
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition). The dialogue
//! engine is generic over these, so tests drive it with in-crate stubs and
//! the binary pins it to the reqwest clients in jobhound-infra.

use jobhound_types::error::SearchApiError;
use jobhound_types::listing::Listing;

use super::query::VacancyQuery;

/// Read-only vacancy search against the external job board.
pub trait VacancySearch: Send + Sync {
    /// Run one search. An empty vector means "no results", which is not an
    /// error; errors are transport or payload failures.
    fn search(
        &self,
        query: &VacancyQuery,
    ) -> impl std::future::Future<Output = Result<Vec<Listing>, SearchApiError>> + Send;
}

/// Free-text city name to area-id resolution.
pub trait AreaDirectory: Send + Sync {
    /// Resolve a city name to its area id. `Ok(None)` means the directory
    /// has no exact match; callers degrade to free-text matching.
    fn resolve_city(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, SearchApiError>> + Send;
}

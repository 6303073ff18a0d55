//! Vacancy listing as returned by the job-search API.
//!
//! Read-only to the core: listings are only ever projected into display
//! text, never mutated. Every field the API may omit is an `Option` and the
//! formatter substitutes a placeholder.

use serde::{Deserialize, Serialize};

/// Stated salary range of a listing. Either bound may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    /// ISO-ish currency code as the API sends it (e.g. "RUR", "USD").
    pub currency: String,
}

/// One job-search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub employer: Option<String>,
    pub city: Option<String>,
    pub salary: Option<Salary>,
    /// Canonical public URL of the listing.
    pub url: String,
}

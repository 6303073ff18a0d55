//! Query translation and the external-API port traits.

pub mod provider;
pub mod query;

pub use provider::{AreaDirectory, VacancySearch};
pub use query::VacancyQuery;

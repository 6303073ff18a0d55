//! Translation of a finalized (profession, filters) pair into the external
//! search API's query parameters.
//!
//! The contract is omission: a filter field that was never set emits no
//! parameter at all, never a null or zero value.

use jobhound_types::filter::{CityFilter, SearchFilters};

/// Ordered query parameters for one vacancy search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyQuery {
    params: Vec<(&'static str, String)>,
}

impl VacancyQuery {
    /// Build the parameter set for a finalized search.
    ///
    /// A city resolved to an area id becomes an `area` parameter; a
    /// free-text-only city is appended to the `text` query instead
    /// (degraded matching, no area filter).
    pub fn build(profession: &str, filters: &SearchFilters, page_size: u32) -> Self {
        let text = match &filters.city {
            Some(CityFilter::Named(city_name)) => format!("{profession} {city_name}"),
            _ => profession.to_string(),
        };

        let mut params = vec![
            ("text", text),
            ("per_page", page_size.to_string()),
            ("page", "0".to_string()),
        ];

        if filters.with_salary || filters.min_salary.is_some() {
            params.push(("only_with_salary", "true".to_string()));
        }
        if let Some(salary) = filters.min_salary {
            params.push(("salary", salary.to_string()));
        }
        if filters.remote {
            params.push(("schedule", "remote".to_string()));
        }
        if let Some(exp) = filters.experience {
            params.push(("experience", exp.code().to_string()));
        }
        if let Some(area_id) = filters.city.as_ref().and_then(|c| c.area_id()) {
            params.push(("area", area_id.to_string()));
        }

        Self { params }
    }

    /// The parameters in emission order.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Look up one parameter by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

//! Wire types for the HH.ru JSON responses.
//!
//! These mirror the upstream payloads exactly and are projected into the
//! domain [`Listing`] at the client boundary; nothing upstream-shaped leaks
//! into the core.

use serde::Deserialize;

use jobhound_types::listing::{Listing, Salary};

/// One page of `/vacancies` results.
#[derive(Debug, Deserialize)]
pub struct VacanciesPage {
    #[serde(default)]
    pub items: Vec<VacancyWire>,
}

/// A single vacancy as HH.ru sends it.
#[derive(Debug, Deserialize)]
pub struct VacancyWire {
    pub name: String,
    pub employer: Option<EmployerWire>,
    pub area: Option<AreaRefWire>,
    pub salary: Option<SalaryWire>,
    pub alternate_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmployerWire {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AreaRefWire {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SalaryWire {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

impl From<VacancyWire> for Listing {
    fn from(wire: VacancyWire) -> Self {
        Listing {
            title: wire.name,
            employer: wire.employer.and_then(|e| e.name),
            city: wire.area.map(|a| a.name),
            salary: wire.salary.map(|s| Salary {
                from: s.from,
                to: s.to,
                currency: s.currency.unwrap_or_else(|| "RUR".to_string()),
            }),
            url: wire.alternate_url.unwrap_or_default(),
        }
    }
}

/// One node of the hierarchical `/areas` tree.
#[derive(Debug, Deserialize)]
pub struct AreaNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub areas: Vec<AreaNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacancy_projection_full() {
        let json = r#"{
            "name": "Rust developer",
            "employer": {"name": "Acme"},
            "area": {"name": "Moscow"},
            "salary": {"from": 200000, "to": null, "currency": "RUR"},
            "alternate_url": "https://hh.ru/vacancy/1"
        }"#;
        let wire: VacancyWire = serde_json::from_str(json).unwrap();
        let listing: Listing = wire.into();

        assert_eq!(listing.title, "Rust developer");
        assert_eq!(listing.employer.as_deref(), Some("Acme"));
        assert_eq!(listing.city.as_deref(), Some("Moscow"));
        let salary = listing.salary.unwrap();
        assert_eq!(salary.from, Some(200_000));
        assert_eq!(salary.to, None);
        assert_eq!(salary.currency, "RUR");
    }

    #[test]
    fn test_vacancy_projection_sparse() {
        let json = r#"{"name": "Courier"}"#;
        let wire: VacancyWire = serde_json::from_str(json).unwrap();
        let listing: Listing = wire.into();

        assert_eq!(listing.title, "Courier");
        assert!(listing.employer.is_none());
        assert!(listing.city.is_none());
        assert!(listing.salary.is_none());
        assert!(listing.url.is_empty());
    }

    #[test]
    fn test_salary_without_currency_defaults_to_rur() {
        let json = r#"{"name": "X", "salary": {"from": 1000, "to": 2000}}"#;
        let wire: VacancyWire = serde_json::from_str(json).unwrap();
        let listing: Listing = wire.into();
        assert_eq!(listing.salary.unwrap().currency, "RUR");
    }

    #[test]
    fn test_area_tree_deserializes_without_children() {
        let json = r#"{"id": "1", "name": "Moscow"}"#;
        let node: AreaNode = serde_json::from_str(json).unwrap();
        assert!(node.areas.is_empty());
    }

    #[test]
    fn test_empty_page() {
        let page: VacanciesPage = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
    }
}

//! Search filter model accumulated over a conversation.
//!
//! Every field starts absent; absence means "no constraint", not a default
//! value. The query translator emits no parameter for an absent field.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// Lowest accepted minimum salary. Values below this are rejected at input
/// time, so a stored `min_salary` is always at or above the floor.
pub const MIN_SALARY_FLOOR: u32 = 10_000;

/// Required-experience bands recognized by the job-search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    NoExperience,
    Between1And3,
    Between3And6,
    MoreThan6,
}

impl Experience {
    /// All bands, in menu order.
    pub const ALL: [Experience; 4] = [
        Experience::NoExperience,
        Experience::Between1And3,
        Experience::Between3And6,
        Experience::MoreThan6,
    ];

    /// The wire code the job-search API expects.
    pub fn code(&self) -> &'static str {
        match self {
            Experience::NoExperience => "noExperience",
            Experience::Between1And3 => "between1And3",
            Experience::Between3And6 => "between3And6",
            Experience::MoreThan6 => "moreThan6",
        }
    }

    /// Human-readable label for menu buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Experience::NoExperience => "No experience",
            Experience::Between1And3 => "1-3 years",
            Experience::Between3And6 => "3-6 years",
            Experience::MoreThan6 => "More than 6 years",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Experience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noExperience" => Ok(Experience::NoExperience),
            "between1And3" => Ok(Experience::Between1And3),
            "between3And6" => Ok(Experience::Between3And6),
            "moreThan6" => Ok(Experience::MoreThan6),
            other => Err(format!("unknown experience code: '{other}'")),
        }
    }
}

/// City constraint: either a resolved area id or a free-text name.
///
/// A single enum value makes the two representations mutually exclusive by
/// construction; setting one necessarily discards the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityFilter {
    /// A city resolved to a directory area id. `name` is kept for display.
    Area { id: String, name: String },
    /// An unresolved city name, matched through the free-text query instead.
    Named(String),
}

impl CityFilter {
    /// Display name regardless of representation.
    pub fn name(&self) -> &str {
        match self {
            CityFilter::Area { name, .. } => name,
            CityFilter::Named(name) => name,
        }
    }

    /// The resolved area id, if this city has one.
    pub fn area_id(&self) -> Option<&str> {
        match self {
            CityFilter::Area { id, .. } => Some(id),
            CityFilter::Named(_) => None,
        }
    }
}

/// The in-progress set of search constraints for one conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Only listings that state a salary.
    pub with_salary: bool,
    /// Salary threshold; implies `with_salary` at query time.
    pub min_salary: Option<u32>,
    /// Remote-schedule listings only.
    pub remote: bool,
    pub experience: Option<Experience>,
    pub city: Option<CityFilter>,
}

impl SearchFilters {
    /// Flip the with-salary flag.
    pub fn toggle_with_salary(&mut self) {
        self.with_salary = !self.with_salary;
    }

    /// Flip the remote-only flag.
    pub fn toggle_remote(&mut self) {
        self.remote = !self.remote;
    }

    /// Set the salary threshold. Rejects values below [`MIN_SALARY_FLOOR`]
    /// without touching the stored value.
    pub fn set_min_salary(&mut self, salary: u32) -> Result<(), FilterError> {
        if salary < MIN_SALARY_FLOOR {
            return Err(FilterError::SalaryBelowFloor {
                given: salary,
                floor: MIN_SALARY_FLOOR,
            });
        }
        self.min_salary = Some(salary);
        Ok(())
    }

    /// Set or clear (`None` = any) the experience band.
    pub fn set_experience(&mut self, experience: Option<Experience>) {
        self.experience = experience;
    }

    /// Constrain to a directory-resolved city. Replaces any free-text city.
    pub fn set_city_area(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.city = Some(CityFilter::Area {
            id: id.into(),
            name: name.into(),
        });
    }

    /// Constrain to an unresolved city name. Replaces any resolved city.
    pub fn set_city_named(&mut self, name: impl Into<String>) {
        self.city = Some(CityFilter::Named(name.into()));
    }

    /// Drop the city constraint entirely.
    pub fn clear_city(&mut self) {
        self.city = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_code_roundtrip() {
        for exp in Experience::ALL {
            let parsed: Experience = exp.code().parse().unwrap();
            assert_eq!(exp, parsed);
        }
    }

    #[test]
    fn test_experience_unknown_code() {
        assert!("senior".parse::<Experience>().is_err());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut filters = SearchFilters::default();

        filters.toggle_with_salary();
        assert!(filters.with_salary);
        filters.toggle_with_salary();
        assert!(!filters.with_salary);

        filters.toggle_remote();
        filters.toggle_remote();
        assert!(!filters.remote);
    }

    #[test]
    fn test_min_salary_below_floor_does_not_mutate() {
        let mut filters = SearchFilters::default();
        filters.set_min_salary(90_000).unwrap();

        let err = filters.set_min_salary(500).unwrap_err();
        assert_eq!(
            err,
            FilterError::SalaryBelowFloor {
                given: 500,
                floor: MIN_SALARY_FLOOR
            }
        );
        assert_eq!(filters.min_salary, Some(90_000));
    }

    #[test]
    fn test_min_salary_at_floor_accepted() {
        let mut filters = SearchFilters::default();
        filters.set_min_salary(MIN_SALARY_FLOOR).unwrap();
        assert_eq!(filters.min_salary, Some(MIN_SALARY_FLOOR));
    }

    #[test]
    fn test_city_representations_mutually_exclusive() {
        let mut filters = SearchFilters::default();

        filters.set_city_area("1", "Moscow");
        assert_eq!(filters.city.as_ref().unwrap().area_id(), Some("1"));

        filters.set_city_named("Voronezh");
        let city = filters.city.as_ref().unwrap();
        assert_eq!(city.area_id(), None);
        assert_eq!(city.name(), "Voronezh");

        filters.set_city_area("2", "Saint Petersburg");
        assert_eq!(filters.city.as_ref().unwrap().area_id(), Some("2"));
    }

    #[test]
    fn test_clear_city() {
        let mut filters = SearchFilters::default();
        filters.set_city_area("1", "Moscow");
        filters.clear_city();
        assert!(filters.city.is_none());
    }

    #[test]
    fn test_set_experience_any_clears() {
        let mut filters = SearchFilters::default();
        filters.set_experience(Some(Experience::MoreThan6));
        filters.set_experience(None);
        assert!(filters.experience.is_none());
    }

    #[test]
    fn test_default_is_unconstrained() {
        let filters = SearchFilters::default();
        assert!(!filters.with_salary);
        assert!(!filters.remote);
        assert!(filters.min_salary.is_none());
        assert!(filters.experience.is_none());
        assert!(filters.city.is_none());
    }
}

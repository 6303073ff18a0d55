//! Per-chat conversation session and dialogue step.
//!
//! A session exists only while a search conversation is in progress; its
//! presence in the store is the sole source of truth for "mid-flow".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::filter::SearchFilters;

/// The stage of the dialogue a session currently occupies.
///
/// The city and experience pickers are menus over `SettingFilters`, not
/// distinct steps; only flows that expect free text get their own step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    AwaitingProfession,
    SettingFilters,
    AwaitingMinSalary,
    AwaitingCityName,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::AwaitingProfession => write!(f, "awaiting_profession"),
            Step::SettingFilters => write!(f, "setting_filters"),
            Step::AwaitingMinSalary => write!(f, "awaiting_min_salary"),
            Step::AwaitingCityName => write!(f, "awaiting_city_name"),
        }
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "awaiting_profession" => Ok(Step::AwaitingProfession),
            "setting_filters" => Ok(Step::SettingFilters),
            "awaiting_min_salary" => Ok(Step::AwaitingMinSalary),
            "awaiting_city_name" => Ok(Step::AwaitingCityName),
            other => Err(format!("invalid dialogue step: '{other}'")),
        }
    }
}

/// One chat's in-progress search conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub step: Step,
    /// Empty until the profession prompt is answered.
    pub profession: String,
    pub filters: SearchFilters,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// A fresh session at the start of the flow: profession prompt pending,
    /// no filters.
    pub fn new() -> Self {
        Self {
            step: Step::AwaitingProfession,
            profession: String::new(),
            filters: SearchFilters::default(),
            started_at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

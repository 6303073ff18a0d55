//! Inbound event model.
//!
//! Button presses arrive from the transport as opaque callback-data strings.
//! They are decoded into [`ButtonAction`] exactly once at the transport
//! boundary and matched exhaustively in the dialogue engine, so an unknown
//! or malformed identifier can never reach the state machine.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::filter::Experience;

/// Chat identity. One live session at most per chat.
pub type ChatId = i64;

/// Entry-point events carried by commands and the persistent reply keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start` or "Main menu": clear any session, show the main menu.
    Start,
    /// "Help": usage text, no session change.
    Help,
    /// "Find jobs" / "New search": start or supersede a session.
    BeginSearch,
}

/// A decoded inline-keyboard press.
///
/// The `Display`/`FromStr` pair is the callback-data wire codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    ToggleSalary,
    ToggleRemote,
    SetMinSalary,
    OpenCityMenu,
    OpenExperienceMenu,
    /// A popular city picked from the city menu, by area id.
    PickCity(String),
    AnyCity,
    /// Switch to free-text city entry.
    CustomCity,
    PickExperience(Experience),
    AnyExperience,
    BackToFilters,
    RunSearch,
    CancelSearch,
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonAction::ToggleSalary => write!(f, "toggle_salary"),
            ButtonAction::ToggleRemote => write!(f, "toggle_remote"),
            ButtonAction::SetMinSalary => write!(f, "set_min_salary"),
            ButtonAction::OpenCityMenu => write!(f, "set_city"),
            ButtonAction::OpenExperienceMenu => write!(f, "set_experience"),
            ButtonAction::PickCity(id) => write!(f, "city_{id}"),
            ButtonAction::AnyCity => write!(f, "city_any"),
            ButtonAction::CustomCity => write!(f, "city_custom"),
            ButtonAction::PickExperience(exp) => write!(f, "exp_{}", exp.code()),
            ButtonAction::AnyExperience => write!(f, "exp_any"),
            ButtonAction::BackToFilters => write!(f, "back_to_filters"),
            ButtonAction::RunSearch => write!(f, "search_jobs"),
            ButtonAction::CancelSearch => write!(f, "cancel_search"),
        }
    }
}

impl FromStr for ButtonAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle_salary" => return Ok(ButtonAction::ToggleSalary),
            "toggle_remote" => return Ok(ButtonAction::ToggleRemote),
            "set_min_salary" => return Ok(ButtonAction::SetMinSalary),
            "set_city" => return Ok(ButtonAction::OpenCityMenu),
            "set_experience" => return Ok(ButtonAction::OpenExperienceMenu),
            "city_any" => return Ok(ButtonAction::AnyCity),
            "city_custom" => return Ok(ButtonAction::CustomCity),
            "exp_any" => return Ok(ButtonAction::AnyExperience),
            "back_to_filters" => return Ok(ButtonAction::BackToFilters),
            "search_jobs" => return Ok(ButtonAction::RunSearch),
            "cancel_search" => return Ok(ButtonAction::CancelSearch),
            _ => {}
        }
        if let Some(id) = s.strip_prefix("city_") {
            if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
                return Ok(ButtonAction::PickCity(id.to_string()));
            }
        }
        if let Some(code) = s.strip_prefix("exp_") {
            if let Ok(exp) = code.parse::<Experience>() {
                return Ok(ButtonAction::PickExperience(exp));
            }
        }
        Err(format!("unknown callback action: '{s}'"))
    }
}

/// An inbound event for one chat, already classified by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Command(Command),
    /// Free text with no command meaning; the current step decides what it is.
    Text(String),
    Button(ButtonAction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_codec_roundtrip() {
        let actions = [
            ButtonAction::ToggleSalary,
            ButtonAction::ToggleRemote,
            ButtonAction::SetMinSalary,
            ButtonAction::OpenCityMenu,
            ButtonAction::OpenExperienceMenu,
            ButtonAction::PickCity("1438".to_string()),
            ButtonAction::AnyCity,
            ButtonAction::CustomCity,
            ButtonAction::PickExperience(Experience::Between3And6),
            ButtonAction::AnyExperience,
            ButtonAction::BackToFilters,
            ButtonAction::RunSearch,
            ButtonAction::CancelSearch,
        ];
        for action in actions {
            let wire = action.to_string();
            let parsed: ButtonAction = wire.parse().unwrap();
            assert_eq!(action, parsed, "round-trip failed for '{wire}'");
        }
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!("frobnicate".parse::<ButtonAction>().is_err());
        assert!("".parse::<ButtonAction>().is_err());
    }

    #[test]
    fn test_malformed_city_and_experience_rejected() {
        // A non-numeric city id is not a valid pick.
        assert!("city_moscow".parse::<ButtonAction>().is_err());
        assert!("city_".parse::<ButtonAction>().is_err());
        assert!("exp_senior".parse::<ButtonAction>().is_err());
    }

    #[test]
    fn test_experience_wire_format() {
        let action = ButtonAction::PickExperience(Experience::NoExperience);
        assert_eq!(action.to_string(), "exp_noExperience");
    }
}

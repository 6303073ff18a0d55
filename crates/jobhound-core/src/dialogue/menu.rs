//! Transport-agnostic menu model and the menu builders.
//!
//! Menus are plain data: rows of labelled buttons. Inline buttons carry a
//! [`ButtonAction`] (the transport serializes it to callback data via its
//! `Display` impl); reply-keyboard buttons are just text the transport maps
//! back to [`Command`]s by label.

use jobhound_types::event::ButtonAction;
use jobhound_types::filter::{Experience, SearchFilters};

/// Reply-keyboard labels. The transport matches inbound text against these
/// to recover the corresponding [`jobhound_types::event::Command`].
pub const BTN_FIND_JOBS: &str = "\u{1f50d} Find jobs";
pub const BTN_HELP: &str = "\u{2139}\u{fe0f} Help";
pub const BTN_NEW_SEARCH: &str = "\u{1f50d} New search";
pub const BTN_MAIN_MENU: &str = "\u{1f3e0} Main menu";

/// Popular cities offered in the city menu, as (area id, display name).
/// Ids come from the job-search API's area directory.
pub const POPULAR_CITIES: [(&str, &str); 9] = [
    ("1", "Moscow"),
    ("2", "Saint Petersburg"),
    ("3", "Yekaterinburg"),
    ("4", "Novosibirsk"),
    ("88", "Kazan"),
    ("66", "Nizhny Novgorod"),
    ("1438", "Minsk"),
    ("160", "Almaty"),
    ("2019", "Tashkent"),
];

/// Display name of a popular city by area id.
pub fn popular_city_name(id: &str) -> Option<&'static str> {
    POPULAR_CITIES
        .iter()
        .find(|(city_id, _)| *city_id == id)
        .map(|(_, name)| *name)
}

/// One inline-keyboard button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub action: ButtonAction,
}

impl InlineButton {
    fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// A menu attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Menu {
    /// Persistent reply keyboard with the given button rows.
    Reply(Vec<Vec<String>>),
    /// Remove the persistent keyboard.
    RemoveReply,
    /// Inline keyboard under one message.
    Inline(Vec<Vec<InlineButton>>),
}

/// The main menu: start a search or read the help.
pub fn main_menu() -> Menu {
    Menu::Reply(vec![vec![BTN_FIND_JOBS.to_string(), BTN_HELP.to_string()]])
}

/// Keyboard shown with search results.
pub fn after_search_menu() -> Menu {
    Menu::Reply(vec![
        vec![BTN_NEW_SEARCH.to_string()],
        vec![BTN_MAIN_MENU.to_string()],
    ])
}

/// The filter menu, with each button label reflecting the current state.
pub fn filters_menu(filters: &SearchFilters) -> Menu {
    let salary_label = if filters.with_salary {
        "\u{2705} Only with salary"
    } else {
        "With salary"
    };
    let remote_label = if filters.remote {
        "\u{2705} Remote only"
    } else {
        "Remote work"
    };
    let min_salary_label = match filters.min_salary {
        Some(n) => format!("\u{1f4b0} Min salary: {n}"),
        None => "\u{1f4b0} Min salary: not set".to_string(),
    };
    let city_label = match &filters.city {
        Some(city) => format!("\u{1f3d9} City: {}", city.name()),
        None => "\u{1f3d9} City: any".to_string(),
    };
    let experience_label = match filters.experience {
        Some(exp) => format!("\u{1f4bc} Experience: {}", exp.label()),
        None => "\u{1f4bc} Experience: any".to_string(),
    };

    Menu::Inline(vec![
        vec![InlineButton::new(salary_label, ButtonAction::ToggleSalary)],
        vec![InlineButton::new(min_salary_label, ButtonAction::SetMinSalary)],
        vec![InlineButton::new(remote_label, ButtonAction::ToggleRemote)],
        vec![InlineButton::new(city_label, ButtonAction::OpenCityMenu)],
        vec![InlineButton::new(experience_label, ButtonAction::OpenExperienceMenu)],
        vec![InlineButton::new("\u{1f680} Run search", ButtonAction::RunSearch)],
        vec![InlineButton::new("\u{274c} Cancel search", ButtonAction::CancelSearch)],
    ])
}

/// Experience picker: the four bands, "any", and back.
pub fn experience_menu() -> Menu {
    let mut rows: Vec<Vec<InlineButton>> = Experience::ALL
        .iter()
        .map(|exp| vec![InlineButton::new(exp.label(), ButtonAction::PickExperience(*exp))])
        .collect();
    rows.push(vec![InlineButton::new(
        "Any experience",
        ButtonAction::AnyExperience,
    )]);
    rows.push(vec![InlineButton::new(
        "\u{2b05}\u{fe0f} Back",
        ButtonAction::BackToFilters,
    )]);
    Menu::Inline(rows)
}

/// City picker: popular cities two per row, then custom entry, any, back.
pub fn city_menu() -> Menu {
    let mut rows: Vec<Vec<InlineButton>> = POPULAR_CITIES
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|(id, name)| {
                    InlineButton::new(*name, ButtonAction::PickCity(id.to_string()))
                })
                .collect()
        })
        .collect();
    rows.push(vec![InlineButton::new(
        "\u{270d}\u{fe0f} Enter another city",
        ButtonAction::CustomCity,
    )]);
    rows.push(vec![InlineButton::new("\u{1f30d} Any city", ButtonAction::AnyCity)]);
    rows.push(vec![InlineButton::new(
        "\u{2b05}\u{fe0f} Back",
        ButtonAction::BackToFilters,
    )]);
    Menu::Inline(rows)
}

//! The dialogue state machine.
//!
//! One entry point, [`DialogueEngine::handle`], routes every inbound event
//! by the session's current step. Mutations go through the session store
//! under short lock scopes; external calls (city lookup, vacancy search)
//! happen strictly outside the lock, against a snapshot.
//!
//! Stale-input policy: an event whose handler needs a session answers with
//! a non-mutating "session expired" notice when none exists. A button press
//! that still finds a live session is applied to it regardless of the
//! session's current step (last-writer-wins across superseded menus).

use jobhound_types::event::{ButtonAction, ChatId, Command, Event};
use jobhound_types::filter::SearchFilters;
use jobhound_types::session::{Session, Step};

use crate::render::render_results;
use crate::search::{AreaDirectory, VacancyQuery, VacancySearch};

use super::input::{parse_min_salary, validate_name};
use super::menu::{
    after_search_menu, city_menu, experience_menu, filters_menu, main_menu, popular_city_name,
    Menu,
};
use super::reply::{Effect, Reply};
use super::store::SessionStore;

const WELCOME: &str = "\u{1f44b} Welcome to jobhound!\n\n\
    I help you find listings on HH.ru.\n\
    Use the buttons below to start a search.";

const HELP: &str = "<b>How to use the bot:</b>\n\n\
    1. Press <b>Find jobs</b>\n\
    2. Type a profession\n\
    3. Adjust the filters:\n\
    \u{2022} <b>With salary</b> - only listings that state a salary\n\
    \u{2022} <b>Min salary</b> - set a salary threshold\n\
    \u{2022} <b>Remote work</b> - remote listings only\n\
    \u{2022} <b>City</b> - pick a city to search in\n\
    \u{2022} <b>Experience</b> - pick the required experience\n\
    4. Press <b>Run search</b> for the results\n\n\
    \u{1f4a1} Starting a new search resets the filters.";

const PROMPT_PROFESSION: &str = "\u{1f50d} <b>Type the profession to search for</b>\n\n\
    Examples: <code>Python developer</code>, <code>Data scientist</code>, \
    <code>Product manager</code>";

const PROFESSION_TOO_SHORT: &str = "The profession name is too short. Try again:";

const PROMPT_MIN_SALARY: &str = "\u{1f4b0} <b>Type the minimum salary (in rubles):</b>\n\n\
    Example: <code>100000</code> or <code>150000</code>";

const INVALID_SALARY: &str = "\u{274c} Invalid value. Type a whole number of at least 10000:\n\
    Example: <code>100000</code>";

const PROMPT_CITY: &str = "\u{1f3d9} <b>Type the city name:</b>\n\n\
    Examples: <code>Voronezh</code>, <code>Krasnodar</code>, <code>Samara</code>";

const CITY_TOO_SHORT: &str = "\u{274c} The city name is too short. Try again:";

const SESSION_EXPIRED: &str = "Session expired. Start a new search.";

const NO_RESULTS: &str = "\u{274c} No listings found for your query";

const SEARCH_CANCELLED: &str = "\u{274c} Search cancelled";

const UNKNOWN_INPUT: &str = "Unknown command. Use the buttons to navigate:";

/// The conversation engine, generic over the two external-API ports.
///
/// Owns the session store; one instance serves every chat.
pub struct DialogueEngine<S, A> {
    store: SessionStore,
    search: S,
    areas: A,
    page_size: u32,
}

impl<S: VacancySearch, A: AreaDirectory> DialogueEngine<S, A> {
    pub fn new(search: S, areas: A, page_size: u32) -> Self {
        Self {
            store: SessionStore::new(),
            search,
            areas,
            page_size,
        }
    }

    /// The session store (exposed for tests and diagnostics).
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Process one inbound event and return the effects to perform, in order.
    pub async fn handle(&self, chat: ChatId, event: Event) -> Vec<Effect> {
        match event {
            Event::Command(command) => self.handle_command(chat, command),
            Event::Text(text) => self.handle_text(chat, &text).await,
            Event::Button(action) => self.handle_button(chat, action).await,
        }
    }

    fn handle_command(&self, chat: ChatId, command: Command) -> Vec<Effect> {
        match command {
            Command::Start => {
                // Entering the main menu abandons any in-progress search.
                self.store.end(chat);
                vec![Effect::Send(Reply::plain(WELCOME).with_menu(main_menu()))]
            }
            Command::Help => {
                vec![Effect::Send(Reply::html(HELP).with_menu(main_menu()))]
            }
            Command::BeginSearch => {
                self.store.start(chat);
                vec![Effect::Send(
                    Reply::html(PROMPT_PROFESSION).with_menu(Menu::RemoveReply),
                )]
            }
        }
    }

    async fn handle_text(&self, chat: ChatId, text: &str) -> Vec<Effect> {
        let step = match self.store.snapshot(chat) {
            Some(session) => session.step,
            None => {
                return vec![Effect::Send(
                    Reply::plain(UNKNOWN_INPUT).with_menu(main_menu()),
                )];
            }
        };

        match step {
            Step::AwaitingProfession => self.on_profession_input(chat, text),
            Step::AwaitingMinSalary => self.on_min_salary_input(chat, text),
            Step::AwaitingCityName => self.on_city_input(chat, text).await,
            // No step expects free text here; nudge without mutating.
            Step::SettingFilters => vec![Effect::Send(
                Reply::plain(UNKNOWN_INPUT).with_menu(main_menu()),
            )],
        }
    }

    fn on_profession_input(&self, chat: ChatId, text: &str) -> Vec<Effect> {
        let Some(profession) = validate_name(text) else {
            return vec![Effect::Send(Reply::plain(PROFESSION_TOO_SHORT))];
        };

        let filters = self.store.update(chat, |session| {
            session.profession = profession.to_string();
            session.step = Step::SettingFilters;
            session.filters.clone()
        });

        match filters {
            Some(filters) => vec![Effect::Send(
                Reply::html(format!(
                    "\u{2705} Profession: <b>{profession}</b>\n\nNow set up your search filters:"
                ))
                .with_menu(filters_menu(&filters)),
            )],
            None => vec![Effect::Send(
                Reply::plain(SESSION_EXPIRED).with_menu(main_menu()),
            )],
        }
    }

    fn on_min_salary_input(&self, chat: ChatId, text: &str) -> Vec<Effect> {
        let salary = match parse_min_salary(text) {
            Ok(salary) => salary,
            Err(err) => {
                tracing::debug!(chat, %err, "rejected min-salary input");
                return vec![Effect::Send(Reply::html(INVALID_SALARY))];
            }
        };

        let filters = self.store.update(chat, |session| {
            // The parser enforced the floor, so the setter cannot reject.
            if session.filters.set_min_salary(salary).is_ok() {
                session.step = Step::SettingFilters;
            }
            session.filters.clone()
        });

        match filters {
            Some(filters) => vec![Effect::Send(
                Reply::html(format!(
                    "\u{2705} Minimum salary set: <b>{salary} \u{20bd}</b>\n\n\
                     You can keep adjusting the filters:"
                ))
                .with_menu(filters_menu(&filters)),
            )],
            None => vec![Effect::Send(
                Reply::plain(SESSION_EXPIRED).with_menu(main_menu()),
            )],
        }
    }

    async fn on_city_input(&self, chat: ChatId, text: &str) -> Vec<Effect> {
        let Some(city_name) = validate_name(text) else {
            return vec![Effect::Send(Reply::html(CITY_TOO_SHORT))];
        };

        // Resolve outside any store lock; a directory failure degrades to
        // free-text matching instead of propagating.
        let resolved = match self.areas.resolve_city(city_name).await {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::warn!(chat, %err, city = city_name, "city lookup failed, degrading to free text");
                None
            }
        };

        let confirmation = match &resolved {
            Some(_) => format!("\u{2705} City <b>'{city_name}'</b> found and set."),
            None => format!(
                "\u{2705} Searching by name: <b>'{city_name}'</b>\n\n\
                 \u{26a0}\u{fe0f} <i>No exact match in the area directory, \
                 listings will be matched by text</i>"
            ),
        };

        let filters = self.store.update(chat, |session| {
            match &resolved {
                Some(id) => session.filters.set_city_area(id.clone(), city_name),
                None => session.filters.set_city_named(city_name),
            }
            session.step = Step::SettingFilters;
            session.filters.clone()
        });

        match filters {
            Some(filters) => vec![Effect::Send(
                Reply::html(format!(
                    "{confirmation}\n\nYou can keep adjusting the filters:"
                ))
                .with_menu(filters_menu(&filters)),
            )],
            None => vec![Effect::Send(
                Reply::plain(SESSION_EXPIRED).with_menu(main_menu()),
            )],
        }
    }

    async fn handle_button(&self, chat: ChatId, action: ButtonAction) -> Vec<Effect> {
        // Cancel works with or without a session: pressing it on a stale
        // menu still lands the user back at the main menu.
        if action == ButtonAction::CancelSearch {
            self.store.end(chat);
            return vec![Effect::Send(
                Reply::plain(SEARCH_CANCELLED).with_menu(main_menu()),
            )];
        }

        let Some(session) = self.store.snapshot(chat) else {
            return vec![Effect::Alert(SESSION_EXPIRED.to_string())];
        };

        match action {
            ButtonAction::ToggleSalary => self.edit_filters(chat, |f| f.toggle_with_salary()),
            ButtonAction::ToggleRemote => self.edit_filters(chat, |f| f.toggle_remote()),
            ButtonAction::SetMinSalary => {
                self.store.update(chat, |s| s.step = Step::AwaitingMinSalary);
                vec![Effect::Send(Reply::html(PROMPT_MIN_SALARY))]
            }
            ButtonAction::OpenCityMenu => vec![Effect::Edit(
                Reply::html("<b>\u{1f3d9} Pick a city to search in:</b>").with_menu(city_menu()),
            )],
            ButtonAction::OpenExperienceMenu => vec![Effect::Edit(
                Reply::html("<b>\u{1f4bc} Pick the required experience:</b>")
                    .with_menu(experience_menu()),
            )],
            ButtonAction::PickCity(id) => {
                // Fall back to the raw id for a city outside the popular
                // table (possible only via a stale or forged button).
                let name = popular_city_name(&id).unwrap_or(id.as_str()).to_string();
                self.edit_filters(chat, move |f| f.set_city_area(id, name))
            }
            ButtonAction::AnyCity => self.edit_filters(chat, |f| f.clear_city()),
            ButtonAction::CustomCity => {
                self.store.update(chat, |s| s.step = Step::AwaitingCityName);
                vec![Effect::Edit(Reply::html(PROMPT_CITY))]
            }
            ButtonAction::PickExperience(exp) => {
                self.edit_filters(chat, move |f| f.set_experience(Some(exp)))
            }
            ButtonAction::AnyExperience => self.edit_filters(chat, |f| f.set_experience(None)),
            ButtonAction::BackToFilters => {
                vec![Effect::Edit(self.filters_reply(&session.profession, &session.filters))]
            }
            ButtonAction::RunSearch => self.run_search(chat, session).await,
            // Handled above; kept so the match stays exhaustive.
            ButtonAction::CancelSearch => unreachable!("cancel handled before session check"),
        }
    }

    /// Apply a filter mutation and re-render the filter menu in place.
    fn edit_filters(&self, chat: ChatId, mutate: impl FnOnce(&mut SearchFilters)) -> Vec<Effect> {
        let updated = self.store.update(chat, |session| {
            mutate(&mut session.filters);
            session.step = Step::SettingFilters;
            (session.profession.clone(), session.filters.clone())
        });

        match updated {
            Some((profession, filters)) => {
                vec![Effect::Edit(self.filters_reply(&profession, &filters))]
            }
            None => vec![Effect::Alert(SESSION_EXPIRED.to_string())],
        }
    }

    fn filters_reply(&self, profession: &str, filters: &SearchFilters) -> Reply {
        Reply::html(format!(
            "\u{2705} Profession: <b>{profession}</b>\n\nAdjust your filters:"
        ))
        .with_menu(filters_menu(filters))
    }

    /// Terminal transition: translate, search, format, and destroy the
    /// session regardless of the outcome.
    async fn run_search(&self, chat: ChatId, session: Session) -> Vec<Effect> {
        let query = VacancyQuery::build(&session.profession, &session.filters, self.page_size);

        tracing::info!(chat, profession = %session.profession, "running search");
        let result = self.search.search(&query).await;

        // The session is finished whether the search worked or not.
        self.store.end(chat);

        match result {
            Ok(listings) if listings.is_empty() => vec![Effect::Send(
                Reply::plain(NO_RESULTS).with_menu(main_menu()),
            )],
            Ok(listings) => {
                let strict = render_results(&session.profession, &listings, true);
                let plain = render_results(&session.profession, &listings, false);
                vec![Effect::Send(
                    Reply::markdown_with_fallback(strict, plain).with_menu(after_search_menu()),
                )]
            }
            Err(err) => {
                tracing::error!(chat, %err, "search failed");
                vec![Effect::Send(
                    Reply::plain(format!("\u{274c} {err}")).with_menu(main_menu()),
                )]
            }
        }
    }
}

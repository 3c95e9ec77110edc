//! Application actions
//!
//! Naming convention: category prefix first, verb last, `Did` marks an async
//! result (`WeatherFetch` is the intent, `WeatherDidLoad` / `WeatherDidError`
//! the outcomes).

use crate::state::{CleanupEvent, WeatherReport};
use crate::stats::CrewStats;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Events =====
    /// Intent: load the cleanup roster
    EventsLoad,
    /// Result: roster arrived
    EventsDidLoad(Vec<CleanupEvent>),
    /// Move the grid selection
    EventSelect(usize),
    /// Join the cleanup with this id
    EventJoin(u32),

    // ===== Search / filter (advisory only in this version) =====
    /// Search box edited
    SearchInput(String),
    /// Search box submitted with Enter
    SearchSubmit(String),
    /// Debounce elapsed for this query
    SearchDidSettle(String),
    /// Location filter selection changed
    FilterSelect(usize),

    // ===== Crew statistics =====
    /// Intent: read the persisted statistics
    StatsLoad,
    /// Result: statistics read (or defaulted)
    StatsDidLoad(CrewStats),

    // ===== Weather =====
    /// Intent: fetch outlook + current temperature
    WeatherFetch,
    /// Result: both endpoints merged successfully
    WeatherDidLoad(WeatherReport),
    /// Result: the pipeline failed; message is the placeholder text
    WeatherDidError(String),

    // ===== UI =====
    /// Create-event stub (shows the coming-soon notice)
    CreateRequest,
    /// Toast timer elapsed
    NoticeDismiss,
    FocusNext,
    FocusPrev,
    FocusSearch,
    FocusEvents,

    // ===== Global =====
    /// Animation clock
    Tick,
    /// Exit the application (handled in the main loop)
    Quit,
}

impl tidecrew_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::EventsLoad => "EventsLoad",
            Action::EventsDidLoad(_) => "EventsDidLoad",
            Action::EventSelect(_) => "EventSelect",
            Action::EventJoin(_) => "EventJoin",
            Action::SearchInput(_) => "SearchInput",
            Action::SearchSubmit(_) => "SearchSubmit",
            Action::SearchDidSettle(_) => "SearchDidSettle",
            Action::FilterSelect(_) => "FilterSelect",
            Action::StatsLoad => "StatsLoad",
            Action::StatsDidLoad(_) => "StatsDidLoad",
            Action::WeatherFetch => "WeatherFetch",
            Action::WeatherDidLoad(_) => "WeatherDidLoad",
            Action::WeatherDidError(_) => "WeatherDidError",
            Action::CreateRequest => "CreateRequest",
            Action::NoticeDismiss => "NoticeDismiss",
            Action::FocusNext => "FocusNext",
            Action::FocusPrev => "FocusPrev",
            Action::FocusSearch => "FocusSearch",
            Action::FocusEvents => "FocusEvents",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}

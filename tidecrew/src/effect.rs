//! Effects - side effects declared by the reducer
//!
//! Effects are descriptions of work; the handler turns them into keyed tasks
//! (or, for the synchronous store, does the work inline). Results come back
//! as actions.

use std::time::Duration;

use tidecrew_core::EffectContext;
use tracing::error;

use crate::action::Action;
use crate::api;
use crate::roster;
use crate::stats::{CrewStats, StatsStore};

/// Quiet period before a search query settles.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// How long a toast stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Side effects that can be triggered by actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load the cleanup roster
    LoadEvents,
    /// Read the persisted crew statistics
    LoadStats,
    /// Write the crew statistics back to the store
    PersistStats(CrewStats),
    /// Fetch the outlook and current-temperature endpoints
    FetchWeather,
    /// Debounce the search box; emits `SearchDidSettle` after the quiet period
    SettleSearch { query: String },
    /// Start the toast dismissal timer
    DismissNotice,
}

/// Process one effect against the given statistics store.
pub fn handle_effect<S: StatsStore>(effect: Effect, store: &S, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadEvents => {
            ctx.tasks().spawn("events", async {
                Action::EventsDidLoad(roster::sample_events())
            });
        }
        Effect::LoadStats => {
            // The store read is synchronous and bounded; no task needed.
            ctx.emit(Action::StatsDidLoad(store.load()));
        }
        Effect::PersistStats(stats) => {
            if let Err(err) = store.save(&stats) {
                error!(error = %err, "failed to persist crew stats");
            }
        }
        Effect::FetchWeather => {
            ctx.tasks().spawn("weather", async {
                match api::fetch_report().await {
                    Ok(report) => Action::WeatherDidLoad(report),
                    Err(err) => {
                        error!(error = %err, "weather fetch failed");
                        Action::WeatherDidError(err.to_string())
                    }
                }
            });
        }
        Effect::SettleSearch { query } => {
            ctx.tasks().debounce("search", SEARCH_DEBOUNCE, async move {
                Action::SearchDidSettle(query)
            });
        }
        Effect::DismissNotice => {
            // Respawning under the same key keeps the newest toast's timer.
            ctx.tasks().spawn("notice", async {
                tokio::time::sleep(NOTICE_TTL).await;
                Action::NoticeDismiss
            });
        }
    }
}

//! Reducer - all state transitions live here
//!
//! Pure data transformation: the reducer mutates state and declares effects,
//! never performing I/O itself.

use tidecrew_core::Dispatched;
use tracing::{debug, info};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Focus, Notice, WeatherPane, TICK_MS};

pub fn reducer(state: &mut AppState, action: Action) -> Dispatched<Effect> {
    match action {
        // ===== Events =====
        Action::EventsLoad => {
            state.events = None;
            Dispatched::changed_with(Effect::LoadEvents)
        }

        Action::EventsDidLoad(events) => {
            state.selected_event = 0;
            state.events = Some(events);
            Dispatched::changed()
        }

        Action::EventSelect(index) => {
            let count = state.events.as_ref().map_or(0, |e| e.len());
            let clamped = index.min(count.saturating_sub(1));
            if clamped == state.selected_event {
                Dispatched::unchanged()
            } else {
                state.selected_event = clamped;
                Dispatched::changed()
            }
        }

        Action::EventJoin(event_id) => {
            let gained = state.stats.record_join();
            info!(event_id, gained, "joined cleanup");
            state.animate_counters();
            state.notice = Some(Notice::success("Joined event! See you there!"));
            Dispatched::changed_with_many(vec![
                Effect::PersistStats(state.stats.clone()),
                Effect::DismissNotice,
            ])
        }

        // ===== Search / filter (advisory only: the displayed set is not
        // filtered in this version) =====
        Action::SearchInput(query) => {
            state.search_query = query.clone();
            Dispatched::changed_with(Effect::SettleSearch { query })
        }

        Action::SearchSubmit(query) | Action::SearchDidSettle(query) => {
            debug!(query = %query, "search settled (advisory only)");
            state.settled_query = Some(query);
            Dispatched::unchanged()
        }

        Action::FilterSelect(index) => {
            if state.locations.is_empty() {
                return Dispatched::unchanged();
            }
            let clamped = index.min(state.locations.len() - 1);
            debug!(location = %state.locations[clamped], "location filter (advisory only)");
            if clamped == state.location_selected {
                Dispatched::unchanged()
            } else {
                state.location_selected = clamped;
                Dispatched::changed()
            }
        }

        // ===== Crew statistics =====
        Action::StatsLoad => Dispatched::effect(Effect::LoadStats),

        Action::StatsDidLoad(stats) => {
            state.stats = stats;
            state.animate_counters();
            Dispatched::changed()
        }

        // ===== Weather =====
        Action::WeatherFetch => {
            state.weather = WeatherPane::Loading;
            Dispatched::changed_with(Effect::FetchWeather)
        }

        Action::WeatherDidLoad(report) => {
            state.weather = WeatherPane::Ready(report);
            Dispatched::changed()
        }

        Action::WeatherDidError(message) => {
            state.weather = WeatherPane::Failed(message);
            Dispatched::changed()
        }

        // ===== UI =====
        Action::CreateRequest => {
            state.notice = Some(Notice::info("Event creation coming soon!"));
            Dispatched::changed_with(Effect::DismissNotice)
        }

        Action::NoticeDismiss => {
            if state.notice.take().is_some() {
                Dispatched::changed()
            } else {
                Dispatched::unchanged()
            }
        }

        Action::FocusNext => set_focus(state, state.focus.next()),
        Action::FocusPrev => set_focus(state, state.focus.prev()),
        Action::FocusSearch => set_focus(state, Focus::Search),
        Action::FocusEvents => set_focus(state, Focus::Events),

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            let mut moving = false;
            for counter in &mut state.counters {
                moving |= counter.step(TICK_MS as u32);
            }
            // Spinners animate while either async region is still loading
            let loading =
                state.events.is_none() || matches!(state.weather, WeatherPane::Loading);
            if moving || loading {
                Dispatched::changed()
            } else {
                Dispatched::unchanged()
            }
        }

        // Quit is handled in the main loop, not here
        Action::Quit => Dispatched::unchanged(),
    }
}

fn set_focus(state: &mut AppState, focus: Focus) -> Dispatched<Effect> {
    if state.focus == focus {
        Dispatched::unchanged()
    } else {
        state.focus = focus;
        Dispatched::changed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster;
    use crate::state::{ForecastDay, WeatherReport};
    use crate::stats::{CrewStats, TRASH_GAIN_MAX, TRASH_GAIN_MIN};

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        reducer(&mut state, Action::EventsDidLoad(roster::sample_events()));
        state
    }

    fn report() -> WeatherReport {
        WeatherReport {
            current_temp: 31,
            days: vec![ForecastDay {
                day: "Friday".into(),
                condition: "Thundery Showers".into(),
                summary: "Afternoon storms".into(),
                high: 33.0,
                low: 26.0,
            }],
        }
    }

    #[test]
    fn events_load_declares_effect() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::EventsLoad);
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::LoadEvents]);
    }

    #[test]
    fn events_did_load_resets_selection() {
        let mut state = AppState::default();
        state.selected_event = 3;
        let result = reducer(&mut state, Action::EventsDidLoad(roster::sample_events()));
        assert!(result.changed);
        assert_eq!(state.selected_event, 0);
        assert_eq!(state.events.as_ref().map(|e| e.len()), Some(4));
    }

    #[test]
    fn select_clamps_to_roster() {
        let mut state = loaded_state();
        assert!(reducer(&mut state, Action::EventSelect(2)).changed);
        assert_eq!(state.selected_event, 2);

        assert!(reducer(&mut state, Action::EventSelect(99)).changed);
        assert_eq!(state.selected_event, 3);

        assert!(!reducer(&mut state, Action::EventSelect(3)).changed);
    }

    #[test]
    fn join_mutates_stats_and_persists() {
        let mut state = loaded_state();
        let result = reducer(&mut state, Action::EventJoin(2));

        assert!(result.changed);
        assert_eq!(state.stats.cleanup_count, 1);
        assert!(state.stats.trash_collected >= TRASH_GAIN_MIN);
        assert!(state.stats.trash_collected <= TRASH_GAIN_MAX);

        assert_eq!(result.effects.len(), 2);
        assert!(matches!(&result.effects[0], Effect::PersistStats(s) if s.cleanup_count == 1));
        assert_eq!(result.effects[1], Effect::DismissNotice);

        let notice = state.notice.expect("join shows a toast");
        assert_eq!(notice.message, "Joined event! See you there!");
    }

    #[test]
    fn repeated_joins_accumulate() {
        let mut state = loaded_state();
        let n = 5;
        for _ in 0..n {
            reducer(&mut state, Action::EventJoin(1));
        }
        assert_eq!(state.stats.cleanup_count, n);
        assert!(state.stats.trash_collected >= n * TRASH_GAIN_MIN);
        assert!(state.stats.trash_collected <= n * TRASH_GAIN_MAX);
    }

    #[test]
    fn search_input_debounces_but_does_not_filter() {
        let mut state = loaded_state();
        let result = reducer(&mut state, Action::SearchInput("pasir".into()));
        assert!(result.changed);
        assert_eq!(
            result.effects,
            vec![Effect::SettleSearch {
                query: "pasir".into()
            }]
        );

        let result = reducer(&mut state, Action::SearchDidSettle("pasir".into()));
        assert!(!result.changed);
        assert_eq!(state.settled_query.as_deref(), Some("pasir"));
        // Advisory only: the displayed set is untouched
        assert_eq!(state.events.as_ref().map(|e| e.len()), Some(4));
    }

    #[test]
    fn filter_select_is_advisory() {
        let mut state = loaded_state();
        let result = reducer(&mut state, Action::FilterSelect(1));
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.location_selected, 1);
        assert_eq!(state.events.as_ref().map(|e| e.len()), Some(4));
    }

    #[test]
    fn stats_did_load_retargets_counters() {
        let mut state = AppState::default();
        let stats = CrewStats {
            cleanup_count: 4,
            trash_collected: 31,
            crew_size: 1,
        };
        let result = reducer(&mut state, Action::StatsDidLoad(stats));
        assert!(result.changed);
        assert!(state.counters.iter().all(|c| c.is_animating()));
    }

    #[test]
    fn weather_flow() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::FetchWeather]);
        assert_eq!(state.weather, WeatherPane::Loading);

        let result = reducer(&mut state, Action::WeatherDidLoad(report()));
        assert!(result.changed);
        assert!(matches!(state.weather, WeatherPane::Ready(_)));

        let result = reducer(
            &mut state,
            Action::WeatherDidError("No forecast data available".into()),
        );
        assert!(result.changed);
        assert_eq!(
            state.weather,
            WeatherPane::Failed("No forecast data available".into())
        );
    }

    #[test]
    fn create_stub_shows_info_toast() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::CreateRequest);
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::DismissNotice]);
        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some("Event creation coming soon!")
        );

        assert!(reducer(&mut state, Action::NoticeDismiss).changed);
        assert!(state.notice.is_none());
        assert!(!reducer(&mut state, Action::NoticeDismiss).changed);
    }

    #[test]
    fn tick_renders_only_while_something_moves() {
        let mut state = loaded_state();
        reducer(&mut state, Action::WeatherDidLoad(report()));

        // Nothing loading, counters at rest
        assert!(!reducer(&mut state, Action::Tick).changed);

        // Animating counters force redraws until they settle
        reducer(&mut state, Action::EventJoin(1));
        assert!(reducer(&mut state, Action::Tick).changed);

        // Weather loading keeps the spinner alive
        let mut state = loaded_state();
        assert_eq!(state.weather, WeatherPane::Loading);
        assert!(reducer(&mut state, Action::Tick).changed);
    }

    #[test]
    fn focus_actions() {
        let mut state = AppState::default();
        assert_eq!(state.focus, Focus::Events);

        assert!(reducer(&mut state, Action::FocusNext).changed);
        assert_eq!(state.focus, Focus::Search);

        assert!(!reducer(&mut state, Action::FocusSearch).changed);
        assert!(reducer(&mut state, Action::FocusEvents).changed);
        assert_eq!(state.focus, Focus::Events);
    }
}

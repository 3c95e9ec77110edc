//! Top-level page: layout, focus routing, toast overlay
//!
//! Each region renders independently from its own slice of state; a region
//! whose area is too small simply skips drawing, so a cramped terminal
//! degrades feature by feature instead of failing.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tidecrew_components::{toast_area, Severity, Toast, ToastProps};
use tidecrew_core::{Component, EventKind, EventOutcome};

use super::{
    EventsGrid, EventsGridProps, HelpBar, HelpBarProps, LocationFilter, LocationFilterProps,
    SearchBar, SearchBarProps, StatsPanel, StatsPanelProps, WeatherPanel, WeatherPanelProps,
};
use crate::action::Action;
use crate::state::{AppState, Focus, NoticeKind};

/// Smallest terminal the full page lays out in.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 15;

/// Width of the filter + weather column.
const SIDE_WIDTH: u16 = 36;

pub struct Page {
    search: SearchBar,
    filter: LocationFilter,
    grid: EventsGrid,
    stats: StatsPanel,
    weather: WeatherPanel,
    help: HelpBar,
    toast: Toast,
}

impl Page {
    pub fn new() -> Self {
        Self {
            search: SearchBar::new(),
            filter: LocationFilter::new(),
            grid: EventsGrid::new(),
            stats: StatsPanel,
            weather: WeatherPanel,
            help: HelpBar,
            toast: Toast,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            frame.render_widget(
                Paragraph::new("Terminal too small for TideCrew").centered(),
                area,
            );
            return;
        }

        let [title_area, stats_area, middle, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Line::from(" 🌊 TideCrew · rally your beach cleanup crew ")
            .centered()
            .style(Style::default().fg(Color::Cyan).bold());
        frame.render_widget(Paragraph::new(title), title_area);

        self.stats.render(
            frame,
            stats_area,
            StatsPanelProps {
                counters: &state.counters,
            },
        );

        let [main_col, side_col] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(SIDE_WIDTH)])
                .areas(middle);

        let [search_area, grid_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(main_col);

        self.search.render(
            frame,
            search_area,
            SearchBarProps {
                query: &state.search_query,
                is_focused: state.focus == Focus::Search,
            },
        );

        self.grid.render(
            frame,
            grid_area,
            EventsGridProps {
                events: state.events.as_deref(),
                selected: state.selected_event,
                is_focused: state.focus == Focus::Events,
                tick: state.tick_count,
            },
        );

        let filter_height = (state.locations.len() as u16 + 2).min(side_col.height);
        let [filter_area, weather_area] =
            Layout::vertical([Constraint::Length(filter_height), Constraint::Min(1)])
                .areas(side_col);

        self.filter.render(
            frame,
            filter_area,
            LocationFilterProps {
                locations: &state.locations,
                selected: state.location_selected,
                is_focused: state.focus == Focus::Filter,
            },
        );

        self.weather.render(
            frame,
            weather_area,
            WeatherPanelProps {
                weather: &state.weather,
                tick: state.tick_count,
            },
        );

        self.help.render(frame, help_area, HelpBarProps);

        // Toast floats above everything, so it renders last
        if let Some(notice) = &state.notice {
            let severity = match notice.kind {
                NoticeKind::Info => Severity::Info,
                NoticeKind::Success => Severity::Success,
                NoticeKind::Error => Severity::Error,
            };
            Component::<Action>::render(
                &mut self.toast,
                frame,
                toast_area(&notice.message, area),
                ToastProps {
                    message: &notice.message,
                    severity,
                },
            );
        }
    }

    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(_, _) = event {
            return EventOutcome::ignored().with_render();
        }

        if let EventKind::Key(key) = event {
            // App-wide keys first
            match key.code {
                KeyCode::Tab => return EventOutcome::action(Action::FocusNext),
                KeyCode::BackTab => return EventOutcome::action(Action::FocusPrev),
                KeyCode::Esc => return EventOutcome::action(Action::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return EventOutcome::action(Action::Quit);
                }
                _ => {}
            }

            // Shortcuts that would collide with typing are disabled while
            // the search box has focus
            if state.focus != Focus::Search {
                match key.code {
                    KeyCode::Char('q') => return EventOutcome::action(Action::Quit),
                    KeyCode::Char('/') => return EventOutcome::action(Action::FocusSearch),
                    KeyCode::Char('e') => return EventOutcome::action(Action::FocusEvents),
                    KeyCode::Char('c') => return EventOutcome::action(Action::CreateRequest),
                    KeyCode::Char('r') => return EventOutcome::action(Action::WeatherFetch),
                    _ => {}
                }
            }
        }

        // Everything else routes to the focused region
        match state.focus {
            Focus::Search => EventOutcome::from_actions(self.search.handle_event(
                event,
                SearchBarProps {
                    query: &state.search_query,
                    is_focused: true,
                },
            )),
            Focus::Filter => EventOutcome::from_actions(self.filter.handle_event(
                event,
                LocationFilterProps {
                    locations: &state.locations,
                    selected: state.location_selected,
                    is_focused: true,
                },
            )),
            Focus::Events => EventOutcome::from_actions(self.grid.handle_event(
                event,
                EventsGridProps {
                    events: state.events.as_deref(),
                    selected: state.selected_event,
                    is_focused: true,
                    tick: state.tick_count,
                },
            )),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

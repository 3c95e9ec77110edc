//! The events grid: one card per cleanup, join control keyed by event id
//!
//! Display order equals input order; no sorting is applied. Search and
//! location filtering are advisory only in this version - the grid always
//! shows the full roster it was handed.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tidecrew_core::{Component, EventKind};

use super::SPINNERS;
use crate::action::Action;
use crate::format;
use crate::state::CleanupEvent;

/// Rendered lines per card, including the trailing blank.
const CARD_HEIGHT: usize = 6;

pub struct EventsGridProps<'a> {
    /// `None` while the roster is loading
    pub events: Option<&'a [CleanupEvent]>,
    pub selected: usize,
    pub is_focused: bool,
    /// Animation frame for the loading spinner
    pub tick: u32,
}

#[derive(Default)]
pub struct EventsGrid {
    /// First visible card index
    scroll_offset: usize,
}

impl EventsGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, selected: usize, viewport_rows: usize) {
        let visible_cards = (viewport_rows / CARD_HEIGHT).max(1);
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + visible_cards {
            self.scroll_offset = selected + 1 - visible_cards;
        }
    }
}

impl Component<Action> for EventsGrid {
    type Props<'a> = EventsGridProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let Some(events) = props.events.filter(|e| !e.is_empty()) else {
            return None;
        };

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    Some(Action::EventSelect(props.selected + 1))
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    Some(Action::EventSelect(props.selected.saturating_sub(1)))
                }
                KeyCode::Enter | KeyCode::Char(' ') => events
                    .get(props.selected)
                    .map(|event| Action::EventJoin(event.id)),
                _ => None,
            },
            EventKind::Scroll { delta, .. } => {
                let next = if *delta > 0 {
                    props.selected + 1
                } else {
                    props.selected.saturating_sub(1)
                };
                Some(Action::EventSelect(next))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Upcoming Cleanups ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let lines = match props.events {
            None => {
                let spinner = SPINNERS[(props.tick as usize / 2) % SPINNERS.len()];
                vec![
                    Line::from(""),
                    Line::from(vec![
                        Span::styled(spinner, Style::default().fg(Color::Cyan)),
                        Span::styled(" Loading events", Style::default().fg(Color::Gray)),
                    ])
                    .centered(),
                ]
            }
            Some([]) => vec![
                Line::from(""),
                Line::from("No events found").centered().dark_gray(),
            ],
            Some(events) => {
                self.ensure_visible(props.selected, inner.height as usize);
                events
                    .iter()
                    .enumerate()
                    .skip(self.scroll_offset)
                    .flat_map(|(i, event)| card_lines(event, i == props.selected))
                    .collect()
            }
        };

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn card_lines(event: &CleanupEvent, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▸ " } else { "  " };
    let title_style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };

    vec![
        Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(event.title.clone(), title_style),
            Span::raw("  "),
            Span::styled(event.weather.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(format!(
            "    📅 {} at {}",
            format::date_label(&event.date),
            event.time
        ))
        .gray(),
        Line::from(format!("    📍 {}", event.location)).gray(),
        Line::from(format!("    👥 {} people going", event.participants)).gray(),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("[ Join cleanup #{} ]", event.id),
                if selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ]),
        Line::from(""),
    ]
}

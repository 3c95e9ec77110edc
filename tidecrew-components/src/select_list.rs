//! Scrollable selection list component

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use tidecrew_core::{Component, EventKind};

/// Props for [`SelectList`]
pub struct SelectListProps<'a, A> {
    /// Items to display
    pub items: &'a [String],
    /// Currently selected index
    pub selected: usize,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Optional border title
    pub title: Option<&'a str>,
    /// Emitted when the selection changes (and on Enter, re-confirming)
    pub on_select: fn(usize) -> A,
}

/// A scrollable selection list with j/k/arrow navigation.
#[derive(Default)]
pub struct SelectList {
    /// Scroll offset for the viewport
    scroll_offset: usize,
}

impl SelectList {
    /// Create a new list.
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected.saturating_sub(viewport_height - 1);
        }
    }
}

impl<A> Component<A> for SelectList {
    type Props<'a> = SelectListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.items.is_empty() {
            return None;
        }

        let last = props.items.len() - 1;

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    let next = (props.selected + 1).min(last);
                    (next != props.selected).then(|| (props.on_select)(next))
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    let next = props.selected.saturating_sub(1);
                    (next != props.selected).then(|| (props.on_select)(next))
                }
                KeyCode::Char('g') | KeyCode::Home => {
                    (props.selected != 0).then(|| (props.on_select)(0))
                }
                KeyCode::Char('G') | KeyCode::End => {
                    (props.selected != last).then(|| (props.on_select)(last))
                }
                KeyCode::Enter => Some((props.on_select)(props.selected)),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let viewport_height = area.height.saturating_sub(2) as usize;
        self.ensure_visible(props.selected, viewport_height);

        let items: Vec<ListItem> = props
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == props.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::raw(item.as_str())).style(style)
            })
            .collect();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        if let Some(title) = props.title {
            block = block.title(title.to_string());
        }

        let list = List::new(items).block(block);

        let mut state = ListState::default().with_selected(Some(props.selected));
        *state.offset_mut() = self.scroll_offset;
        frame.render_stateful_widget(list, area, &mut state);
    }
}

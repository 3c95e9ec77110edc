//! Single-line text input component

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tidecrew_core::{Component, EventKind};

/// Props for [`TextInput`]
pub struct TextInputProps<'a, A> {
    /// Current input value
    pub value: &'a str,
    /// Placeholder text shown while empty
    pub placeholder: &'a str,
    /// Whether this component has focus
    pub is_focused: bool,
    /// Optional border title
    pub title: Option<&'a str>,
    /// Emitted on every edit
    pub on_change: fn(String) -> A,
    /// Emitted on Enter
    pub on_submit: fn(String) -> A,
}

/// A single-line text input with cursor.
///
/// Handles typing, backspace/delete, and cursor movement. The value itself
/// lives in application state; only the cursor is internal.
#[derive(Default)]
pub struct TextInput {
    /// Cursor position (byte index into the value)
    cursor: usize,
}

impl TextInput {
    /// Create a new input.
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn step_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut pos = self.cursor - 1;
            while pos > 0 && !value.is_char_boundary(pos) {
                pos -= 1;
            }
            self.cursor = pos;
        }
    }

    fn step_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut pos = self.cursor + 1;
            while pos < value.len() && !value.is_char_boundary(pos) {
                pos += 1;
            }
            self.cursor = pos;
        }
    }

    fn inserted(&mut self, value: &str, c: char) -> String {
        let mut next = String::with_capacity(value.len() + c.len_utf8());
        next.push_str(&value[..self.cursor]);
        next.push(c);
        next.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        next
    }

    fn removed_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..start]);
        next.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(next)
    }

    fn removed_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }
        let mut next = String::with_capacity(value.len());
        next.push_str(&value[..self.cursor]);
        if let Some((_, c)) = value[self.cursor..].char_indices().next() {
            next.push_str(&value[self.cursor + c.len_utf8()..]);
        }
        Some(next)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        match event {
            EventKind::Key(key) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return match key.code {
                        // readline-style: start / end / clear
                        KeyCode::Char('a') => {
                            self.cursor = 0;
                            None
                        }
                        KeyCode::Char('e') => {
                            self.cursor = props.value.len();
                            None
                        }
                        KeyCode::Char('u') => {
                            self.cursor = 0;
                            Some((props.on_change)(String::new()))
                        }
                        _ => None,
                    };
                }

                match key.code {
                    KeyCode::Char(c) => {
                        let next = self.inserted(props.value, c);
                        Some((props.on_change)(next))
                    }
                    KeyCode::Backspace => {
                        self.removed_before(props.value).map(|v| (props.on_change)(v))
                    }
                    KeyCode::Delete => self.removed_at(props.value).map(|v| (props.on_change)(v)),
                    KeyCode::Left => {
                        self.step_left(props.value);
                        None
                    }
                    KeyCode::Right => {
                        self.step_right(props.value);
                        None
                    }
                    KeyCode::Home => {
                        self.cursor = 0;
                        None
                    }
                    KeyCode::End => {
                        self.cursor = props.value.len();
                        None
                    }
                    KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let display_text = if props.value.is_empty() {
            props.placeholder
        } else {
            props.value
        };
        let style = if props.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

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

        frame.render_widget(Paragraph::new(display_text).style(style).block(block), area);

        if props.is_focused {
            // cursor sits inside the border
            let cursor_x = area.x + 1 + self.cursor as u16;
            let cursor_y = area.y + 1;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}

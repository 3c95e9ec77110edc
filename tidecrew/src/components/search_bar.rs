//! Search box wrapping the shared text input
//!
//! Edits debounce into `SearchDidSettle`; Enter settles immediately. Results
//! are advisory only in this version (see the grid contract).

use ratatui::{layout::Rect, Frame};
use tidecrew_components::{TextInput, TextInputProps};
use tidecrew_core::{Component, EventKind};

use crate::action::Action;

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props<'a>(props: &SearchBarProps<'a>) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: props.query,
            placeholder: "Search events...",
            is_focused: props.is_focused,
            title: Some(" Search "),
            on_change: Action::SearchInput,
            on_submit: Action::SearchSubmit,
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.input
            .handle_event(event, Self::input_props(&props))
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.input.render(frame, area, Self::input_props(&props));
    }
}

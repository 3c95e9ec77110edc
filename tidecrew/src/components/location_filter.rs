//! Location filter wrapping the shared select list
//!
//! Selection is advisory only in this version (see the grid contract).

use ratatui::{layout::Rect, Frame};
use tidecrew_components::{SelectList, SelectListProps};
use tidecrew_core::{Component, EventKind};

use crate::action::Action;

pub struct LocationFilterProps<'a> {
    pub locations: &'a [String],
    pub selected: usize,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct LocationFilter {
    list: SelectList,
}

impl LocationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    fn list_props<'a>(props: &LocationFilterProps<'a>) -> SelectListProps<'a, Action> {
        SelectListProps {
            items: props.locations,
            selected: props.selected,
            is_focused: props.is_focused,
            title: Some(" Location "),
            on_select: Action::FilterSelect,
        }
    }
}

impl Component<Action> for LocationFilter {
    type Props<'a> = LocationFilterProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.list
            .handle_event(event, Self::list_props(&props))
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.list.render(frame, area, Self::list_props(&props));
    }
}

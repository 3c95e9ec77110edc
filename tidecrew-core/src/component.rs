//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component that renders from props and emits actions.
///
/// Rules:
/// 1. Props carry all read-only data needed for rendering
/// 2. `handle_event` returns actions; it never mutates external state
/// 3. `render` is a function of props, plus internal UI state such as a
///    cursor or scroll offset kept in `&mut self`
///
/// Focus is passed through props rather than read from the event, which keeps
/// components reusable across focus schemes.
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator` over actions: `None`, `Some(action)`, or a
    /// `Vec`. The default implementation returns nothing (render-only
    /// components).
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

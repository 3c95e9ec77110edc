//! Test utilities
//!
//! - [`key`] / [`char_key`] / [`ctrl_key`]: build `KeyEvent`s from strings
//! - [`RenderHarness`]: render components into a test buffer and read it back
//!   as plain text for assertions
//! - [`ActionAssertions`]: fluent checks on collected action vectors
//! - [`assert_emitted!`]: pattern-match emitted actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use crate::keys::parse_key_string;

/// Create a `KeyEvent` from a key string, panicking on invalid input.
///
/// ```
/// use tidecrew_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("ctrl+p");
/// assert_eq!(k.code, KeyCode::Char('p'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// `KeyEvent` for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Render-to-buffer harness for visual tests.
///
/// ```ignore
/// let mut harness = RenderHarness::new(60, 24);
/// let output = harness.render_to_string_plain(|frame| {
///     component.render(frame, frame.area(), props);
/// });
/// assert!(output.contains("No events found"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    /// Run a render closure and return the buffer contents as plain text,
    /// one line per terminal row, styling stripped.
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).expect("draw to test backend");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Flatten a buffer to its symbols, row by row.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Fluent assertions over a collected action vector.
pub trait ActionAssertions<A> {
    /// Assert no actions were emitted.
    fn assert_empty(&self);
    /// Assert exactly `n` actions were emitted.
    fn assert_count(&self, n: usize);
    /// Assert the first emitted action equals `expected`.
    fn assert_first(&self, expected: A);
}

impl<A: std::fmt::Debug + PartialEq> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got: {:?}", self);
    }

    fn assert_count(&self, n: usize) {
        assert_eq!(
            self.len(),
            n,
            "expected {} actions, got {}: {:?}",
            n,
            self.len(),
            self
        );
    }

    fn assert_first(&self, expected: A) {
        match self.first() {
            Some(first) => assert_eq!(first, &expected, "first action mismatch"),
            None => panic!("expected first action {:?}, but none were emitted", expected),
        }
    }
}

/// Assert that an action matching a pattern was emitted.
///
/// ```ignore
/// let actions = component.handle_event(&event, props).into_iter().collect::<Vec<_>>();
/// assert_emitted!(actions, Action::EventJoin(2));
/// assert_emitted!(actions, Action::SearchInput(_));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

//! Transient toast notification overlay
//!
//! Render-only: the host app owns the message lifecycle and clears it after
//! its dismiss timer fires. Rendered last so it floats above other regions.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tidecrew_core::Component;

/// Notification severity, mapped to the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    fn accent(self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
        }
    }
}

/// Props for [`Toast`]
pub struct ToastProps<'a> {
    /// Message text
    pub message: &'a str,
    /// Severity controls the accent color
    pub severity: Severity,
}

/// A transient notification box.
#[derive(Default)]
pub struct Toast;

impl<A> Component<A> for Toast {
    type Props<'a> = ToastProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 8 || area.height < 3 {
            return;
        }

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(props.severity.accent()));
        let line = Line::from(props.message.to_string()).bold();
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

/// Compute the toast's floating rect: top-right corner, sized to the message,
/// clamped to the host area.
pub fn toast_area(message: &str, area: Rect) -> Rect {
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let x = area.right().saturating_sub(width + 1).max(area.x);
    Rect {
        x,
        y: area.y + 1,
        width,
        height: 3.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidecrew_core::testing::RenderHarness;

    #[test]
    fn renders_message() {
        let mut harness = RenderHarness::new(50, 10);
        let mut toast = Toast;

        let output = harness.render_to_string_plain(|frame| {
            let area = toast_area("Joined event!", frame.area());
            Component::<()>::render(
                &mut toast,
                frame,
                area,
                ToastProps {
                    message: "Joined event!",
                    severity: Severity::Success,
                },
            );
        });

        assert!(output.contains("Joined event!"));
    }

    #[test]
    fn skips_tiny_areas() {
        let mut harness = RenderHarness::new(6, 2);
        let mut toast = Toast;

        let output = harness.render_to_string_plain(|frame| {
            Component::<()>::render(
                &mut toast,
                frame,
                frame.area(),
                ToastProps {
                    message: "hi",
                    severity: Severity::Info,
                },
            );
        });

        assert!(!output.contains("hi"));
    }

    #[test]
    fn area_hugs_top_right() {
        let host = Rect::new(0, 0, 80, 24);
        let area = toast_area("Joined event!", host);
        assert_eq!(area.y, 1);
        assert!(area.right() <= host.right());
        assert!(area.x > 40);
    }
}

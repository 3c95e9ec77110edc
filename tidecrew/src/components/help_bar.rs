//! Bottom help bar

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tidecrew_core::Component;

use crate::action::Action;

pub struct HelpBar;

pub struct HelpBarProps;

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let hint = |key: &'static str, what: &'static str| {
            [
                Span::styled(key, Style::default().fg(Color::Cyan).bold()),
                Span::styled(what, Style::default().fg(Color::DarkGray)),
            ]
        };

        let help = Line::from(
            [
                hint(" tab", " focus  "),
                hint("j/k", " move  "),
                hint("⏎", " join  "),
                hint("/", " search  "),
                hint("c", " create  "),
                hint("r", " weather  "),
                hint("q", " quit "),
            ]
            .concat(),
        )
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}

//! Crew statistics panel: three animated counters

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tidecrew_core::Component;

use crate::action::Action;
use crate::state::CounterAnim;

pub struct StatsPanelProps<'a> {
    /// Cleanups joined, trash collected, crew size
    pub counters: &'a [CounterAnim; 3],
}

const LABELS: [&str; 3] = ["Cleanups Joined", "Kg Trash Collected", "Crew Members"];

#[derive(Default)]
pub struct StatsPanel;

impl Component<Action> for StatsPanel {
    type Props<'a> = StatsPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Crew Stats ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 2 {
            return;
        }

        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

        for ((counter, label), column) in
            props.counters.iter().zip(LABELS).zip(columns.iter())
        {
            let lines = vec![
                Line::from(counter.display().to_string())
                    .centered()
                    .cyan()
                    .bold(),
                Line::from(label).centered().dark_gray(),
            ];
            frame.render_widget(Paragraph::new(lines), *column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidecrew_core::testing::RenderHarness;

    #[test]
    fn shows_values_and_labels() {
        let mut harness = RenderHarness::new(70, 5);
        let mut panel = StatsPanel;
        let counters = [
            CounterAnim::resting(3),
            CounterAnim::resting(27),
            CounterAnim::resting(1),
        ];

        let output = harness.render_to_string_plain(|frame| {
            panel.render(
                frame,
                frame.area(),
                StatsPanelProps {
                    counters: &counters,
                },
            );
        });

        assert!(output.contains("3"));
        assert!(output.contains("27"));
        assert!(output.contains("Cleanups Joined"));
        assert!(output.contains("Kg Trash Collected"));
        assert!(output.contains("Crew Members"));
    }

    #[test]
    fn mid_animation_shows_interpolated_value() {
        let mut harness = RenderHarness::new(70, 5);
        let mut panel = StatsPanel;

        let mut moving = CounterAnim::resting(0);
        moving.retarget(100);
        moving.step(500);
        let counters = [moving, CounterAnim::resting(0), CounterAnim::resting(1)];

        let output = harness.render_to_string_plain(|frame| {
            panel.render(
                frame,
                frame.area(),
                StatsPanelProps {
                    counters: &counters,
                },
            );
        });

        assert!(output.contains("50"));
        assert!(!output.contains("100"));
    }
}

//! Weather panel: current temperature plus the 4-day outlook
//!
//! All-or-nothing per the pipeline contract: a ready report renders in full,
//! otherwise an error placeholder stands alone.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tidecrew_core::Component;

use super::SPINNERS;
use crate::action::Action;
use crate::format;
use crate::state::{WeatherPane, WeatherReport};

pub struct WeatherPanelProps<'a> {
    pub weather: &'a WeatherPane,
    /// Animation frame for the loading spinner
    pub tick: u32,
}

#[derive(Default)]
pub struct WeatherPanel;

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Beach Weather ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 2 {
            return;
        }

        let lines = match props.weather {
            WeatherPane::Loading => {
                let spinner = SPINNERS[(props.tick as usize / 2) % SPINNERS.len()];
                vec![
                    Line::from(""),
                    Line::from(vec![
                        Span::styled(spinner, Style::default().fg(Color::Cyan)),
                        Span::styled(" Fetching weather", Style::default().fg(Color::Gray)),
                    ])
                    .centered(),
                ]
            }
            WeatherPane::Failed(message) => vec![
                Line::from(""),
                Line::from("⚠ Weather unavailable").centered().red().bold(),
                Line::from(message.clone())
                    .centered()
                    .style(Style::default().fg(Color::Rgb(200, 100, 100))),
            ],
            WeatherPane::Ready(report) => report_lines(report),
        };

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

fn report_lines(report: &WeatherReport) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("🌤  "),
            Span::styled(
                format!("{}°C", report.current_temp),
                Style::default().fg(Color::Cyan).bold(),
            ),
        ])
        .centered(),
        Line::from("Current Temperature").centered().dark_gray(),
        Line::from(""),
        Line::from("4-Day Forecast").centered().bold(),
        Line::from(""),
    ];

    for day in &report.days {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", day.day), Style::default().fg(Color::White).bold()),
            Span::raw(format!("{}  ", format::weather_icon(&day.condition))),
            Span::styled(
                format!("{:.0}°", day.high),
                Style::default().fg(Color::LightRed),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{:.0}°", day.low),
                Style::default().fg(Color::LightBlue),
            ),
        ]));
        if !day.summary.is_empty() {
            lines.push(
                Line::from(format!("  {}", day.summary))
                    .style(Style::default().fg(Color::Gray)),
            );
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ForecastDay;
    use tidecrew_core::testing::RenderHarness;

    fn render(pane: &WeatherPane) -> String {
        let mut harness = RenderHarness::new(40, 20);
        let mut panel = WeatherPanel;
        harness.render_to_string_plain(|frame| {
            panel.render(
                frame,
                frame.area(),
                WeatherPanelProps {
                    weather: pane,
                    tick: 0,
                },
            );
        })
    }

    #[test]
    fn loading_shows_spinner_text() {
        let output = render(&WeatherPane::Loading);
        assert!(output.contains("Fetching weather"));
    }

    #[test]
    fn error_placeholder_stands_alone() {
        let output = render(&WeatherPane::Failed("No forecast data available".into()));
        assert!(output.contains("Weather unavailable"));
        assert!(output.contains("No forecast data available"));
        assert!(!output.contains("Current Temperature"));
    }

    #[test]
    fn ready_report_shows_everything() {
        let pane = WeatherPane::Ready(WeatherReport {
            current_temp: 32,
            days: vec![
                ForecastDay {
                    day: "Friday".into(),
                    condition: "Thundery Showers".into(),
                    summary: "Afternoon storms".into(),
                    high: 33.0,
                    low: 26.0,
                },
                ForecastDay {
                    day: "Saturday".into(),
                    condition: "Partly Cloudy (Day)".into(),
                    summary: String::new(),
                    high: 32.0,
                    low: 27.0,
                },
            ],
        });

        let output = render(&pane);
        assert!(output.contains("32°C"));
        assert!(output.contains("Current Temperature"));
        assert!(output.contains("4-Day Forecast"));
        assert!(output.contains("Friday"));
        assert!(output.contains("33°"));
        assert!(output.contains("Afternoon storms"));
        assert!(output.contains("Saturday"));
    }
}

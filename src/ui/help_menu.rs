//! Help overlay listing keybindings for each input mode.
//!
//! Toggled by `?`. Any key closes it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::layout::centered;

type Binding = (&'static str, &'static str);

/// Keys grouped by the mode that handles them, in dispatch order
const MODES: &[(&str, &[Binding])] = &[
    (
        "Page",
        &[
            ("j/k PgUp/PgDn", "scroll"),
            ("g/G", "top / bottom"),
            ("Tab/S-Tab", "next / previous control"),
            ("Enter/Space", "activate focused control"),
            ("m", "navigation menu"),
            ("1-4", "filter portfolio"),
            ("t", "scroll to top"),
            ("x", "dismiss newest toast"),
            ("Esc", "close menu or panel"),
            ("q", "quit"),
        ],
    ),
    (
        "Form field",
        &[
            ("type", "edit the field"),
            ("Tab/Enter/Down", "next field"),
            ("S-Tab/Up", "previous field"),
            ("Esc", "jump to Send"),
        ],
    ),
    (
        "Payment modal",
        &[
            ("Enter/p", "proceed to payment"),
            ("Esc/c", "cancel"),
            ("click outside", "cancel"),
        ],
    ),
];

const KEY_COLUMN: usize = 16;
const WIDTH: u16 = 52;

#[derive(Default)]
pub struct HelpMenuWidget;

impl HelpMenuWidget {
    pub fn new() -> Self {
        Self
    }

    /// Centered popup tall enough for every mode group
    pub fn calculate_area(screen: Rect) -> Rect {
        let height = Self::build_lines().len() as u16 + 2;
        centered(screen, WIDTH, height)
    }

    fn build_lines() -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = Vec::new();
        for (i, (mode, bindings)) in MODES.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*mode, heading)));
            for (key, label) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<width$}", width = KEY_COLUMN), key_style),
                    Span::styled(*label, Style::default().fg(Color::White)),
                ]));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Ctrl-C quits from anywhere. Any key closes this.",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpMenuWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " ? | Keys by mode ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Black));

        Paragraph::new(Self::build_lines())
            .block(block)
            .render(area, buf);
    }
}

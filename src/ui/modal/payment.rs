use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::site::PaymentModal;
use crate::ui::layout::centered;

pub struct PaymentModalWidget<'a> {
    state: &'a PaymentModal,
}

impl<'a> PaymentModalWidget<'a> {
    pub fn new(state: &'a PaymentModal) -> Self {
        Self { state }
    }

    /// Centered box sized for a plan summary
    pub fn calculate_area(total: Rect) -> Rect {
        centered(total, 56, 14)
    }
}

impl Widget for PaymentModalWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(plan) = self.state.plan() else {
            return;
        };
        if area.width < 30 || area.height < 8 {
            return;
        }

        Clear.render(area, buf);

        let block = Block::default()
            .title(" Complete Your Subscription ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Plan name and price
            Constraint::Min(1),    // Features
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(
                plan.name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(plan.price, Style::default().fg(Color::Yellow))),
        ])
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let features: Vec<Line> = plan
            .features
            .iter()
            .map(|feature| {
                Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                    Span::raw(*feature),
                ])
            })
            .collect();
        Paragraph::new(features).render(chunks[1], buf);

        let help = if self.state.is_processing() {
            Line::from(Span::styled(
                "Processing payment...",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter ", Style::default().fg(Color::Cyan)),
                Span::raw("proceed to payment "),
                Span::styled(" Esc ", Style::default().fg(Color::Cyan)),
                Span::raw("cancel"),
            ])
        };
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

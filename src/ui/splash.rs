//! Loading screen drawn over the page until it fades out.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::site::content::BRAND;
use crate::site::LoadingPhase;

pub struct SplashWidget {
    phase: LoadingPhase,
}

impl SplashWidget {
    pub fn new(phase: LoadingPhase) -> Self {
        Self { phase }
    }
}

impl Widget for SplashWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = match self.phase {
            LoadingPhase::Loading => Color::Magenta,
            LoadingPhase::FadingOut => Color::DarkGray,
            LoadingPhase::Hidden => return,
        };

        Clear.render(area, buf);
        let top = area.height.saturating_sub(2) / 2;
        let mut lines = vec![Line::default(); usize::from(top)];
        lines.push(Line::from(Span::styled(
            BRAND,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

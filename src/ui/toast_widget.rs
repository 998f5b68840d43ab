use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::ToastPosition;
use crate::notify::{Notification, NotificationId, Severity};

const TOAST_WIDTH: u16 = 44;
const GAP: u16 = 1;

pub struct ToastWidget<'a> {
    toasts: &'a [&'a Notification],
    position: ToastPosition,
    now: Instant,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toasts: &'a [&'a Notification], now: Instant) -> Self {
        Self {
            toasts,
            position: ToastPosition::default(),
            now,
        }
    }

    pub fn position(mut self, pos: ToastPosition) -> Self {
        self.position = pos;
        self
    }

    /// Draw the stack and return where each toast landed, for click-to-dismiss.
    pub fn render(self, frame: &mut Frame, area: Rect) -> Vec<(NotificationId, Rect)> {
        let mut areas = Vec::with_capacity(self.toasts.len());
        let mut offset = 0u16;

        for toast in self.toasts {
            let height = toast_height(&toast.message, TOAST_WIDTH);
            let toast_area = self.calculate_position(area, TOAST_WIDTH, height, offset);
            offset += height + GAP;

            frame.render_widget(Clear, toast_area);

            let border_style = border_style(toast.severity);
            let title = match toast.remaining(self.now) {
                Some(left) => format!(" {} {}s ", toast.severity, left.as_secs() + 1),
                None => format!(" {} ", toast.severity),
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title)
                .title_bottom(Line::from(" x close ").right_aligned())
                .style(Style::default().bg(Color::Black));

            let text = Paragraph::new(Line::from(vec![
                Span::styled(
                    toast.severity.icon(),
                    border_style.add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(toast.message.as_str()),
            ]))
            .block(block)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);

            frame.render_widget(text, toast_area);
            areas.push((toast.id, toast_area));
        }

        areas
    }

    fn calculate_position(&self, area: Rect, width: u16, height: u16, offset: u16) -> Rect {
        let (x, y) = match self.position {
            ToastPosition::BottomRight => {
                let x = area.right().saturating_sub(width + 2);
                let y = area.bottom().saturating_sub(height + 2 + offset);
                (x, y)
            }
            ToastPosition::BottomLeft => {
                let x = area.left() + 2;
                let y = area.bottom().saturating_sub(height + 2 + offset);
                (x, y)
            }
            ToastPosition::TopRight => {
                let x = area.right().saturating_sub(width + 2);
                let y = area.top() + 1 + offset;
                (x, y)
            }
            ToastPosition::TopLeft => {
                let x = area.left() + 2;
                let y = area.top() + 1 + offset;
                (x, y)
            }
            ToastPosition::Center => {
                let x = area.left() + (area.width.saturating_sub(width)) / 2;
                let y = area.top() + (area.height.saturating_sub(height)) / 2 + offset;
                (x, y)
            }
        };

        Rect::new(x, y, width.min(area.width), height.min(area.height)).intersection(area)
    }
}

/// Rows needed for a message wrapped inside a bordered box
fn toast_height(message: &str, width: u16) -> u16 {
    // Icon and space take two columns
    let inner = usize::from(width.saturating_sub(2).max(1));
    let chars = message.chars().count() + 2;
    let lines = chars.div_ceil(inner).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

fn border_style(severity: Severity) -> Style {
    let color = match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    };
    Style::default().fg(color)
}

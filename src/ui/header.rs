//! Sticky header with nav links, plus the dropdown mobile menu.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::app::{App, Target, MENU};
use crate::site::content::{BRAND, SECTIONS};

const MENU_LABEL: &str = "[ ≡ Menu ]";
const MENU_WIDTH: u16 = 20;

fn nav_style(active: bool, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::White)
    }
}

pub struct HeaderWidget<'a> {
    app: &'a App,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Where the menu button sits inside a header drawn at `area`
    pub fn menu_button_area(area: Rect) -> Rect {
        let width = MENU_LABEL.chars().count() as u16;
        Rect::new(
            area.right().saturating_sub(width + 1),
            area.y + 1,
            width.min(area.width),
            1,
        )
        .intersection(area)
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let focused = self.app.focused_target();

        // Solid background once the page has scrolled
        let style = if self.app.header.solid {
            Style::default().bg(Color::Rgb(30, 30, 46))
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {BRAND} "),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(style);

        let mut spans = Vec::new();
        for (id, label) in SECTIONS {
            let active = self.app.active_nav.as_deref() == Some(id);
            let is_focused = focused.as_ref() == Some(&Target::NavLink(id));
            spans.push(Span::styled(format!(" {label} "), nav_style(active, is_focused)));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);

        let menu_open = self.app.menu.is_active(MENU);
        let menu_focused = focused.as_ref() == Some(&Target::MenuButton);
        Paragraph::new(Span::styled(MENU_LABEL, nav_style(menu_open, menu_focused)))
            .render(Self::menu_button_area(area), buf);
    }
}

/// Dropdown nav shown when the mobile menu is open
pub struct MenuWidget<'a> {
    app: &'a App,
}

impl<'a> MenuWidget<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Dropdown area just under the header's right edge
    pub fn calculate_area(header: Rect, screen: Rect) -> Rect {
        let height = SECTIONS.len() as u16 + 2;
        Rect::new(
            header.right().saturating_sub(MENU_WIDTH + 1),
            header.bottom(),
            MENU_WIDTH,
            height,
        )
        .intersection(screen)
    }
}

impl Widget for MenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let focused = self.app.focused_target();

        let lines: Vec<Line> = SECTIONS
            .iter()
            .map(|(id, label)| {
                let active = self.app.active_nav.as_deref() == Some(*id);
                let is_focused = focused.as_ref() == Some(&Target::NavLink(*id));
                Line::from(Span::styled(format!(" {label} "), nav_style(active, is_focused)))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Menu ")
            .style(Style::default().bg(Color::Black));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{poll, read, Event};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::debug;

use crate::app::{App, Target, MENU};
use crate::handlers::keyboard::handle_key_event;
use crate::handlers::mouse::handle_mouse_event;
use crate::ui::layout::create_layout_with_help;
use crate::ui::page::build_page;
use crate::ui::{
    HeaderWidget, HelpMenuWidget, MenuWidget, PaymentModalWidget, SplashWidget, ToastWidget,
};

const SCROLL_TOP_LABEL: &str = "[ ↑ Top ]";

/// Action returned from key handling
pub(crate) enum KeyAction {
    Continue,
    Quit,
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Expire toasts, run deferred work and debounced scroll handlers
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|f| draw_ui(f, app, now))?;

        // The first completed frame is the load event; later calls are ignored
        app.mark_loaded(Instant::now());

        // Short poll so counters and toast countdowns keep animating
        if poll(Duration::from_millis(50))? {
            let event = read()?;

            match event {
                Event::Key(key) => match handle_key_event(app, key, Instant::now()) {
                    KeyAction::Continue => {}
                    KeyAction::Quit => return Ok(()),
                },
                Event::Mouse(mouse) => {
                    handle_mouse_event(app, mouse, Instant::now());
                }
                Event::Resize(w, h) => {
                    // Next draw reports the new geometry
                    debug!(width = w, height = h, "terminal resized");
                }
                _ => {}
            }
        }
    }
}

/// Draw one frame and cache the geometry the app needs for scrolling and clicks
pub fn draw_ui(f: &mut Frame, app: &mut App, now: Instant) {
    let (header_area, body_area, help_area) =
        create_layout_with_help(f.area(), app.header.hidden);

    if header_area.height > 0 {
        f.render_widget(HeaderWidget::new(app), header_area);
        app.hit_areas.menu_button = Some(HeaderWidget::menu_button_area(header_area));
    } else {
        app.hit_areas.menu_button = None;
    }

    let (lines, layout) = build_page(app, now);
    let page = Paragraph::new(lines).scroll((app.scroll_offset, 0));
    f.render_widget(page, body_area);
    app.set_layout(layout, body_area.height, now);

    if app.scroll_top_visible {
        draw_scroll_top_button(f, body_area, app);
    }

    draw_help_bar(f, help_area, app);

    if app.menu.is_active(MENU) {
        let menu_area = MenuWidget::calculate_area(header_area, f.area());
        f.render_widget(MenuWidget::new(app), menu_area);
        app.hit_areas.menu = Some(menu_area);
    } else {
        app.hit_areas.menu = None;
    }

    // Draw toasts (overlay on top of everything except modals)
    let toasts = app.notifications.visible();
    let toast_areas = ToastWidget::new(&toasts, now)
        .position(app.config.notifications.position)
        .render(f, body_area);
    app.hit_areas.toasts = toast_areas;

    if app.show_help {
        let help_menu_area = HelpMenuWidget::calculate_area(f.area());
        f.render_widget(HelpMenuWidget::new(), help_menu_area);
    }

    // Draw modal last (highest z-index)
    if app.payment.is_open() {
        let area = PaymentModalWidget::calculate_area(f.area());
        f.render_widget(PaymentModalWidget::new(&app.payment), area);
        app.hit_areas.modal = Some(area);
    } else {
        app.hit_areas.modal = None;
    }

    if !app.loading.is_hidden(now) {
        f.render_widget(SplashWidget::new(app.loading.phase(now)), f.area());
    }
}

fn draw_scroll_top_button(f: &mut Frame, body: Rect, app: &App) {
    let width = SCROLL_TOP_LABEL.chars().count() as u16;
    let area = Rect::new(
        body.right().saturating_sub(width + 1),
        body.bottom().saturating_sub(1),
        width,
        1,
    )
    .intersection(body);
    let style = if app.focused_target() == Some(Target::ScrollTop) {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    };
    f.render_widget(Paragraph::new(Span::styled(SCROLL_TOP_LABEL, style)), area);
}

fn draw_help_bar(f: &mut Frame, area: Rect, app: &App) {
    if app.form.is_sending() {
        let msg = Paragraph::new(Line::from(vec![
            Span::styled(
                " SENDING ",
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            Span::raw(" Sending your message..."),
        ]))
        .style(Style::default().bg(Color::DarkGray));
        f.render_widget(msg, area);
        return;
    }

    if let Some(field) = app.editing_field() {
        let msg = Paragraph::new(Line::from(vec![
            Span::styled(
                " EDIT ",
                Style::default().fg(Color::Black).bg(Color::Green),
            ),
            Span::raw(format!(
                " {} | Tab next, S-Tab prev, Esc done",
                field.label()
            )),
        ]))
        .style(Style::default().bg(Color::DarkGray));
        f.render_widget(msg, area);
        return;
    }

    let section = app.active_nav.as_deref().unwrap_or("home");
    let hints = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", section.to_uppercase()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" j/k scroll  Tab focus  Enter select  m menu  1-4 filter  x dismiss  ? help  q quit"),
    ]))
    .style(Style::default().bg(Color::DarkGray));
    f.render_widget(hints, area);
}

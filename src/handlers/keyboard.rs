use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Target};
use crate::site::content::PORTFOLIO_CATEGORIES;
use crate::site::portfolio;

use super::modal::handle_payment_modal_key;
use crate::event_loop::KeyAction;

/// Rows moved by PageUp/PageDown, leaving a little overlap
fn page_rows(app: &App) -> i32 {
    i32::from(app.viewport_height.saturating_sub(2).max(1))
}

/// Filter bound to a number key: 1 is "all", then categories in page order
fn filter_for_digit(c: char) -> Option<&'static str> {
    match c {
        '1' => Some(portfolio::ALL),
        '2'..='9' => {
            let index = c.to_digit(10)? as usize - 2;
            PORTFOLIO_CATEGORIES.get(index).copied()
        }
        _ => None,
    }
}

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Continue;
    }

    // Global quit, works from any mode
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('q'), KeyModifiers::CONTROL) => return KeyAction::Quit,
        _ => {}
    }

    if app.show_help {
        // Any key closes help; q still quits
        if key.code == KeyCode::Char('q') {
            return KeyAction::Quit;
        }
        app.show_help = false;
        return KeyAction::Continue;
    }

    if app.payment.is_open() {
        handle_payment_modal_key(app, key, now);
        return KeyAction::Continue;
    }

    if app
        .focused_target()
        .as_ref()
        .is_some_and(Target::is_text_input)
    {
        handle_field_key(app, key, now);
        return KeyAction::Continue;
    }

    handle_page_key(app, key, now)
}

/// Keys while a form field has focus: text goes into the field
fn handle_field_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char(c) => app.type_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Tab | KeyCode::Enter | KeyCode::Down => app.focus_next(now),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(now),
        KeyCode::Esc => {
            app.focus_target(&Target::Submit, now);
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent, now: Instant) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => return KeyAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => app.scroll_by(1, now),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_by(-1, now),
        KeyCode::PageDown => app.scroll_by(page_rows(app), now),
        KeyCode::PageUp => app.scroll_by(-page_rows(app), now),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_by(-i32::from(u16::MAX), now),
        KeyCode::Char('G') | KeyCode::End => app.scroll_by(i32::from(u16::MAX), now),
        KeyCode::Tab => app.focus_next(now),
        KeyCode::BackTab => app.focus_prev(now),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(now),
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('t') => app.scroll_to_top(now),
        KeyCode::Char('x') => app.dismiss_latest_notification(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Esc => {
            app.escape();
        }
        KeyCode::Char(c) => {
            if let Some(filter) = filter_for_digit(c) {
                app.select_filter(filter, now);
            }
        }
        _ => {}
    }
    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PageLayout;
    use crate::config::Config;
    use crate::site::form::Field;
    use crate::site::scroll::SectionAnchor;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(now: Instant) -> App {
        let mut app = App::new(Config::default(), now);
        let anchors = ["home", "services", "portfolio", "pricing", "faq", "contact"]
            .iter()
            .enumerate()
            .map(|(i, id)| SectionAnchor::new(*id, i as u16 * 30))
            .collect();
        let layout = PageLayout {
            anchors,
            elements: Vec::new(),
            height: 200,
        };
        app.set_layout(layout, 40, now);
        app
    }

    #[test]
    fn digits_map_to_filters() {
        assert_eq!(filter_for_digit('1'), Some("all"));
        assert_eq!(filter_for_digit('2'), Some("branding"));
        assert_eq!(filter_for_digit('4'), Some("digital"));
        assert_eq!(filter_for_digit('5'), None);
        assert_eq!(filter_for_digit('a'), None);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let now = Instant::now();
        let mut app = app(now);
        app.open_plan("monthly");
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handle_key_event(&mut app, key, now), KeyAction::Quit));
    }

    #[test]
    fn q_types_into_a_focused_field() {
        let now = Instant::now();
        let mut app = app(now);
        app.focus_field(Field::Name, now);

        let action = handle_key_event(&mut app, press(KeyCode::Char('q')), now);
        assert!(matches!(action, KeyAction::Continue));
        assert_eq!(app.form.value(Field::Name), "q");
    }

    #[test]
    fn modal_swallows_page_keys() {
        let now = Instant::now();
        let mut app = app(now);
        app.open_plan("quarterly");

        handle_key_event(&mut app, press(KeyCode::Char('j')), now);
        assert_eq!(app.scroll_offset, 0);

        handle_key_event(&mut app, press(KeyCode::Esc), now);
        assert!(!app.payment.is_open());
    }

    #[test]
    fn number_key_filters_portfolio() {
        let now = Instant::now();
        let mut app = app(now);
        handle_key_event(&mut app, press(KeyCode::Char('3')), now);
        assert_eq!(app.portfolio.current_filter(), "print");
        assert_eq!(app.notifications.len(), 1);
    }

    #[test]
    fn help_closes_on_any_key() {
        let now = Instant::now();
        let mut app = app(now);
        handle_key_event(&mut app, press(KeyCode::Char('?')), now);
        assert!(app.show_help);
        handle_key_event(&mut app, press(KeyCode::Char('j')), now);
        assert!(!app.show_help);
        assert_eq!(app.scroll_offset, 0);
    }
}

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::{App, Target};
use crate::site::content::SECTIONS;

const SCROLL_LINES: i32 = 3;

fn contains(area: Rect, col: u16, row: u16) -> bool {
    area.contains(Position { x: col, y: row })
}

pub(crate) fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Clicking a toast is its close button
            let clicked_toast = app
                .hit_areas
                .toasts
                .iter()
                .find(|(_, area)| contains(*area, mouse.column, mouse.row))
                .map(|(id, _)| *id);
            if let Some(id) = clicked_toast {
                app.notifications.dismiss(id);
                return;
            }

            // The open modal owns the screen; a click on the backdrop closes it
            if app.payment.is_open() {
                let inside = app
                    .hit_areas
                    .modal
                    .is_some_and(|modal| contains(modal, mouse.column, mouse.row));
                if !inside {
                    app.close_modal();
                }
                return;
            }

            if let Some(button) = app.hit_areas.menu_button {
                if contains(button, mouse.column, mouse.row) {
                    app.toggle_menu();
                    return;
                }
            }

            // Click outside the open menu closes it; a row inside picks a link
            match app.hit_areas.menu {
                Some(menu) if contains(menu, mouse.column, mouse.row) => {
                    let row = usize::from(mouse.row.saturating_sub(menu.y + 1));
                    if let Some((section, _)) = SECTIONS.get(row) {
                        app.activate_target(&Target::NavLink(*section), now);
                    }
                }
                _ => app.close_menu(),
            }
        }
        MouseEventKind::ScrollUp => app.scroll_by(-SCROLL_LINES, now),
        MouseEventKind::ScrollDown => app.scroll_by(SCROLL_LINES, now),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::MENU;
    use crate::config::Config;
    use crate::notify::Severity;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn clicking_a_toast_dismisses_it() {
        let now = Instant::now();
        let mut app = App::new(Config::default(), now);
        let id = app.notify(now, "Scrolled to top!", Severity::Info);
        app.hit_areas.toasts = vec![(id, Rect::new(50, 1, 44, 3))];

        handle_mouse_event(&mut app, click(60, 2), now);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn click_outside_menu_closes_it() {
        let now = Instant::now();
        let mut app = App::new(Config::default(), now);
        app.toggle_menu();
        app.hit_areas.menu = Some(Rect::new(59, 3, 20, 8));

        handle_mouse_event(&mut app, click(60, 4), now);
        assert!(!app.menu.is_active(MENU));

        app.toggle_menu();
        handle_mouse_event(&mut app, click(5, 20), now);
        assert!(!app.menu.is_active(MENU));
    }

    #[test]
    fn open_modal_blocks_page_clicks_and_backdrop_closes_it() {
        let now = Instant::now();
        let mut app = App::new(Config::default(), now);
        app.open_plan("monthly");
        app.hit_areas.menu_button = Some(Rect::new(69, 1, 10, 1));
        app.hit_areas.modal = Some(Rect::new(22, 8, 56, 14));

        // Menu button sits behind the modal
        handle_mouse_event(&mut app, click(70, 1), now);
        assert!(!app.menu.is_active(MENU));
        assert!(app.payment.is_open());

        handle_mouse_event(&mut app, click(40, 12), now);
        assert!(app.payment.is_open());

        handle_mouse_event(&mut app, click(1, 28), now);
        assert!(!app.payment.is_open());
    }
}

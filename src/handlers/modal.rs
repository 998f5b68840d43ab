use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Keys while the payment modal is open. The modal swallows everything else.
pub(crate) fn handle_payment_modal_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('p') => app.proceed_payment(now),
        KeyCode::Esc | KeyCode::Char('c') => {
            app.close_modal();
        }
        _ => {}
    }
}

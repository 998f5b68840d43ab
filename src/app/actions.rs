//! Visitor actions on App: what each button, link and key does.

use std::time::Instant;

use tracing::{info, warn};

use super::*;
use crate::site::cta::{self, SCROLLED_TO_TOP_MESSAGE};
use crate::site::form::{self, Field, SubmitOutcome};
use crate::site::payment::PAYMENT_READY_MESSAGE;

impl App {
    /// Activate whatever currently has focus (Enter/Space).
    pub fn activate(&mut self, now: Instant) {
        if let Some(target) = self.focused_target() {
            self.activate_target(&target, now);
        }
    }

    pub fn activate_target(&mut self, target: &Target, now: Instant) {
        match target {
            Target::NavLink(section) => {
                self.scroll_to_section(section, now);
                self.close_menu();
            }
            Target::MenuButton => self.toggle_menu(),
            Target::Cta {
                label,
                in_service_card,
            } => self.press_cta(label, *in_service_card, now),
            Target::Filter(filter) => self.select_filter(filter, now),
            Target::Question(id) => self.toggle_question(id),
            Target::Plan(plan) => self.open_plan(plan),
            Target::Field(_) => {}
            Target::Submit => self.submit_form(now),
            Target::ScrollTop => self.scroll_to_top(now),
        }
    }

    pub fn toggle_menu(&mut self) {
        if let Err(e) = self.menu.toggle(MENU) {
            warn!(error = %e, "menu toggle failed");
        }
    }

    /// Close the mobile menu (nav link chosen, click outside). No-op if closed.
    pub fn close_menu(&mut self) {
        self.menu.deactivate_all();
    }

    pub fn select_filter(&mut self, filter: &str, now: Instant) {
        match self.portfolio.select(filter) {
            Ok(change) => {
                self.notify(now, change.message, Severity::Info);
            }
            Err(e) => warn!(error = %e, "portfolio filter ignored"),
        }
    }

    pub fn toggle_question(&mut self, id: &str) {
        if let Err(e) = self.faq.toggle(id) {
            warn!(error = %e, "faq toggle ignored");
        }
    }

    pub fn open_plan(&mut self, plan: &str) {
        if self.payment.open(plan).is_none() {
            warn!(plan, "unknown plan ignored");
        }
    }

    pub fn close_modal(&mut self) -> bool {
        self.payment.close()
    }

    /// Start the simulated checkout
    pub fn proceed_payment(&mut self, now: Instant) {
        if self.payment.proceed() {
            let delay = self.config.timing.payment_ms;
            self.defer(now, delay, Deferred::PaymentDone);
        }
    }

    pub(crate) fn finish_payment(&mut self, now: Instant) {
        if self.payment.complete() {
            info!("simulated payment completed");
            self.notify(now, PAYMENT_READY_MESSAGE, Severity::Success);
        }
    }

    pub fn submit_form(&mut self, now: Instant) {
        match self.form.submit() {
            SubmitOutcome::Invalid => {
                self.notify(now, form::INVALID_FORM_MESSAGE, Severity::Error);
            }
            SubmitOutcome::Sending => {
                let delay = self.config.timing.form_submit_ms;
                self.defer(now, delay, Deferred::FormSent);
            }
            SubmitOutcome::Busy => {}
        }
    }

    pub(crate) fn finish_form(&mut self, now: Instant) {
        if self.form.complete() {
            info!("simulated contact form submission completed");
            self.notify(now, form::SENT_MESSAGE, Severity::Success);
        }
    }

    pub fn press_cta(&mut self, label: &str, in_service_card: bool, now: Instant) {
        let Some(action) = cta::route(label, in_service_card) else {
            return;
        };
        if action.delayed {
            self.notify(now, action.message, Severity::Info);
            let delay = self.config.timing.cta_scroll_delay_ms;
            self.defer(now, delay, Deferred::ScrollTo(action.section));
        } else {
            self.scroll_to_section(action.section, now);
            self.notify(now, action.message, Severity::Info);
        }
    }

    pub fn scroll_to_top(&mut self, now: Instant) {
        self.set_scroll(0, now);
        self.notify(now, SCROLLED_TO_TOP_MESSAGE, Severity::Info);
    }

    /// Type into the focused form field
    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.editing_field() {
            self.form.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.editing_field() {
            self.form.pop_char(field);
        }
    }

    /// Close the newest toast (its close button)
    pub fn dismiss_latest_notification(&mut self) {
        self.notifications.dismiss_latest();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Esc: close the topmost overlay. Returns whether anything closed.
    pub fn escape(&mut self) -> bool {
        if self.show_help {
            self.show_help = false;
            return true;
        }
        if self.close_modal() {
            return true;
        }
        !self.menu.deactivate_all().is_empty()
    }

    /// Focus a form field by its position for quick jumps
    pub fn focus_field(&mut self, field: Field, now: Instant) -> bool {
        self.focus_target(&Target::Field(field), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::layout;
    use std::time::Duration;

    fn app(t0: Instant) -> App {
        let mut app = App::new(Config::default(), t0);
        app.set_layout(layout(), 40, t0);
        app
    }

    fn visible_messages(app: &App) -> Vec<String> {
        app.notifications
            .visible()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    #[test]
    fn filter_click_notifies_and_replaces_previous_toast() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.select_filter("print", t0);
        app.select_filter("all", t0 + Duration::from_millis(10));

        assert_eq!(
            visible_messages(&app),
            vec!["Portfolio filtered by: All Projects"]
        );
        assert_eq!(app.portfolio.current_filter(), "all");
    }

    #[test]
    fn unknown_filter_is_logged_not_fatal() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.select_filter("sculpture", t0);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn invalid_submit_shows_error_toast() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.submit_form(t0);

        let visible = app.notifications.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].severity, Severity::Error);
        assert!(!app.has_pending_work());
    }

    #[test]
    fn valid_submit_completes_after_delay() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.form.set_value(Field::Name, "Dev");
        app.form.set_value(Field::Email, "dev@studio.io");
        app.form.set_value(Field::Message, "Please quote a brochure.");
        app.submit_form(t0);
        assert!(app.form.is_sending());

        app.tick(t0 + Duration::from_millis(1999));
        assert!(app.form.is_sending());

        app.tick(t0 + Duration::from_millis(2000));
        assert!(!app.form.is_sending());
        assert_eq!(app.form.value(Field::Name), "");
        assert_eq!(visible_messages(&app), vec![form::SENT_MESSAGE]);
    }

    #[test]
    fn payment_flow_closes_modal_and_notifies() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.activate_target(&Target::Plan("monthly"), t0);
        assert!(app.payment.is_open());

        app.proceed_payment(t0);
        app.tick(t0 + Duration::from_millis(2500));

        assert!(!app.payment.is_open());
        assert_eq!(visible_messages(&app), vec![PAYMENT_READY_MESSAGE]);
    }

    #[test]
    fn learn_more_scrolls_after_delay() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.press_cta("Learn More", true, t0);
        assert_eq!(app.scroll_offset, 0);

        app.tick(t0 + Duration::from_millis(1500));
        assert_eq!(
            app.scroll_offset,
            90 - HEADER_HEIGHT - app.config.scroll.section_gap
        );
    }

    #[test]
    fn nav_link_closes_menu() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.toggle_menu();
        app.activate_target(&Target::NavLink("contact"), t0);
        assert!(!app.menu.is_active(MENU));
    }

    #[test]
    fn escape_closes_topmost_overlay_first() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.open_plan("annual");
        app.toggle_help();

        assert!(app.escape());
        assert!(app.payment.is_open());
        assert!(app.escape());
        assert!(!app.payment.is_open());
        assert!(!app.escape());
    }

    #[test]
    fn typing_goes_to_focused_field_only() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.type_char('x');
        assert_eq!(app.form.value(Field::Name), "");

        app.focus_field(Field::Name, t0);
        app.type_char('A');
        app.type_char('b');
        app.backspace();
        assert_eq!(app.form.value(Field::Name), "A");
    }
}

//! Scrolling and focus movement on App.

use std::time::Instant;

use tracing::warn;

use super::*;
use crate::site::content::{HERO_BUTTONS, PORTFOLIO_CATEGORIES, SECTIONS, SERVICES};
use crate::site::form::Field;
use crate::site::payment::PLANS;
use crate::site::portfolio;

impl App {
    /// Every focusable element, in page order
    pub fn targets(&self) -> Vec<Target> {
        let mut targets: Vec<Target> = SECTIONS
            .iter()
            .map(|(id, _)| Target::NavLink(*id))
            .collect();
        targets.push(Target::MenuButton);
        targets.extend(HERO_BUTTONS.iter().map(|label| Target::Cta {
            label: *label,
            in_service_card: false,
        }));
        targets.extend(SERVICES.iter().map(|service| Target::Cta {
            label: service.button,
            in_service_card: true,
        }));
        targets.push(Target::Filter(portfolio::ALL));
        targets.extend(PORTFOLIO_CATEGORIES.iter().map(|c| Target::Filter(*c)));
        targets.extend(
            self.faq
                .entries()
                .iter()
                .map(|entry| Target::Question(entry.id.clone())),
        );
        targets.extend(PLANS.iter().map(|plan| Target::Plan(plan.key)));
        targets.extend(Field::ALL.into_iter().map(Target::Field));
        targets.push(Target::Submit);
        if self.scroll_top_visible {
            targets.push(Target::ScrollTop);
        }
        targets
    }

    pub fn focused_target(&self) -> Option<Target> {
        self.targets().into_iter().nth(self.focus)
    }

    /// Whether keystrokes should go to a form field
    pub fn editing_field(&self) -> Option<Field> {
        match self.focused_target()? {
            Target::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn focus_next(&mut self, now: Instant) {
        let count = self.targets().len();
        if count == 0 {
            return;
        }
        self.leave_focus();
        self.focus = (self.focus + 1) % count;
        self.reveal_focus(now);
    }

    pub fn focus_prev(&mut self, now: Instant) {
        let count = self.targets().len();
        if count == 0 {
            return;
        }
        self.leave_focus();
        self.focus = (self.focus + count - 1) % count;
        self.reveal_focus(now);
    }

    /// Move focus to a specific element, if present
    pub fn focus_target(&mut self, target: &Target, now: Instant) -> bool {
        let Some(index) = self.targets().iter().position(|t| t == target) else {
            return false;
        };
        self.leave_focus();
        self.focus = index;
        self.reveal_focus(now);
        true
    }

    /// Blur handling: leaving a form field validates it
    fn leave_focus(&mut self) {
        if let Some(field) = self.editing_field() {
            self.form.blur(field);
        }
    }

    /// Keep focus on an existing element after the target list shrinks
    pub(crate) fn clamp_focus(&mut self) {
        let count = self.targets().len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }

    /// Scroll so the focused element's section is in view
    fn reveal_focus(&mut self, now: Instant) {
        let Some(target) = self.focused_target() else {
            return;
        };
        let Some(section) = target.section() else {
            return;
        };
        let Some(anchor) = self.anchor(section) else {
            return;
        };
        let top = anchor.top;
        let bottom = self
            .layout
            .anchors
            .iter()
            .find(|a| a.top > top)
            .map_or(self.layout.height, |a| a.top);
        let in_view = top < self.scroll_offset.saturating_add(self.viewport_height)
            && bottom > self.scroll_offset.saturating_add(HEADER_HEIGHT);
        if !in_view {
            self.scroll_to_section(section, now);
        }
    }

    fn anchor(&self, section: &str) -> Option<&SectionAnchor> {
        self.layout.anchors.iter().find(|a| a.id == section)
    }

    /// Scroll by a signed number of rows. Ignored while scrolling is locked.
    pub fn scroll_by(&mut self, delta: i32, now: Instant) {
        if self.scroll_locked() {
            return;
        }
        let next = (i32::from(self.scroll_offset) + delta).clamp(0, i32::from(self.max_scroll()));
        self.set_scroll(next as u16, now);
    }

    /// Jump to a section, leaving room for the header.
    pub fn scroll_to_section(&mut self, section: &str, now: Instant) {
        let Some(anchor) = self.anchor(section) else {
            warn!(section, "scroll to unknown section ignored");
            return;
        };
        let offset = scroll::scroll_target(anchor, HEADER_HEIGHT, &self.config.scroll);
        self.set_scroll(offset.min(self.max_scroll()), now);
    }

    /// Set the offset and arm the debounced scroll handlers
    pub(crate) fn set_scroll(&mut self, offset: u16, now: Instant) {
        self.scroll_offset = offset;
        self.header_debounce.trigger(now);
        self.nav_debounce.trigger(now);
        self.scroll_top_debounce.trigger(now);
        self.observe_reveals(now);
    }
}

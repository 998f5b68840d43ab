//! Independent type definitions used by App.

use crate::site::Field;

/// Work scheduled on the app's timer queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// The simulated contact-form request finished
    FormSent,
    /// The simulated checkout finished
    PaymentDone,
    /// Scroll to a section after a toast had time to be read
    ScrollTo(&'static str),
}

/// An element the visitor can focus with Tab and activate with Enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Header nav link to a section
    NavLink(&'static str),
    /// Mobile menu button
    MenuButton,
    /// Call-to-action button
    Cta {
        label: &'static str,
        in_service_card: bool,
    },
    /// Portfolio filter button
    Filter(&'static str),
    /// FAQ question
    Question(String),
    /// Pricing card button
    Plan(&'static str),
    /// Contact form input
    Field(Field),
    /// Contact form submit button
    Submit,
    /// Floating scroll-to-top button
    ScrollTop,
}

impl Target {
    /// Section the target lives in, used to bring it into view on focus.
    /// Header and floating controls are always on screen and have none.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Target::NavLink(_) | Target::MenuButton | Target::ScrollTop => None,
            Target::Cta {
                in_service_card, ..
            } => Some(if *in_service_card { "services" } else { "home" }),
            Target::Filter(_) => Some("portfolio"),
            Target::Question(_) => Some("faq"),
            Target::Plan(_) => Some("pricing"),
            Target::Field(_) | Target::Submit => Some("contact"),
        }
    }

    /// Whether focus is in a text input
    pub fn is_text_input(&self) -> bool {
        matches!(self, Target::Field(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_controls_have_no_section() {
        assert_eq!(Target::NavLink("faq").section(), None);
        assert_eq!(Target::ScrollTop.section(), None);
    }

    #[test]
    fn only_fields_take_text_input() {
        assert!(Target::Field(Field::Email).is_text_input());
        assert!(!Target::Submit.is_text_input());
        assert!(!Target::Filter("all").is_text_input());
    }

    #[test]
    fn service_card_buttons_belong_to_services() {
        let in_card = Target::Cta {
            label: "Learn More",
            in_service_card: true,
        };
        let hero = Target::Cta {
            label: "Get Started",
            in_service_card: false,
        };
        assert_eq!(in_card.section(), Some("services"));
        assert_eq!(hero.section(), Some("home"));
    }
}

//! Call-to-action buttons: map a button label to where it takes the visitor.

pub const SCROLLED_TO_TOP_MESSAGE: &str = "Scrolled to top!";

/// What a call-to-action button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaAction {
    /// Section to scroll to
    pub section: &'static str,
    /// Info toast to show
    pub message: &'static str,
    /// Whether the scroll waits for the visitor to read the toast first
    pub delayed: bool,
}

/// Route a button by its (case-insensitive) label.
///
/// `in_service_card` distinguishes the service cards' "Learn more" buttons,
/// which are the only ones that react to that label.
pub fn route(label: &str, in_service_card: bool) -> Option<CtaAction> {
    let text = label.trim().to_lowercase();

    if text.contains("get started") || text.contains("start free trial") {
        return Some(CtaAction {
            section: "pricing",
            message: "Choose your perfect plan below!",
            delayed: false,
        });
    }
    if text.contains("view portfolio") {
        return Some(CtaAction {
            section: "portfolio",
            message: "Check out our amazing work!",
            delayed: false,
        });
    }
    if text.contains("learn more") && in_service_card {
        return Some(CtaAction {
            section: "pricing",
            message: "Explore our template subscriptions by choosing a plan!",
            delayed: true,
        });
    }
    if text.contains("get custom design") || text.contains("get custom quote") {
        return Some(CtaAction {
            section: "contact",
            message: "Tell us about your custom design needs!",
            delayed: false,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_known_labels() {
        assert_eq!(route("Get Started", false).map(|a| a.section), Some("pricing"));
        assert_eq!(
            route("  Start Free Trial ", false).map(|a| a.section),
            Some("pricing")
        );
        assert_eq!(
            route("View Portfolio", false).map(|a| a.message),
            Some("Check out our amazing work!")
        );
        assert_eq!(
            route("Get Custom Quote", false).map(|a| a.section),
            Some("contact")
        );
    }

    #[test]
    fn learn_more_only_in_service_cards_and_delayed() {
        assert_eq!(route("Learn More", false), None);
        let action = route("Learn More", true).unwrap();
        assert!(action.delayed);
        assert_eq!(action.section, "pricing");
    }

    #[test]
    fn unknown_label_does_nothing() {
        assert_eq!(route("Subscribe to newsletter", false), None);
    }
}

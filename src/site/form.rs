//! Contact form: field validation and the simulated submission.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Loose email shape check: something@something.something, no whitespace
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Minimum message length, in characters
pub const MIN_MESSAGE_LEN: usize = 10;

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form before submitting";
pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full name",
            Field::Email => "Email address",
            Field::Message => "Message",
        }
    }
}

/// Validate one trimmed field value, returning the error to show
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let value = value.trim();
    match field {
        Field::Name if value.is_empty() => Some("Full name is required"),
        Field::Email if value.is_empty() => Some("Email address is required"),
        Field::Email if !is_valid_email(value) => Some("Please enter a valid email address"),
        Field::Message if value.is_empty() => Some("Message is required"),
        Field::Message if value.chars().count() < MIN_MESSAGE_LEN => {
            Some("Message should be at least 10 characters long")
        }
        _ => None,
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    /// Submission in flight; inputs are locked
    Sending,
}

/// Outcome of pressing the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed validation
    Invalid,
    /// Validation passed and the form is now sending
    Sending,
    /// A submission is already in flight
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, &'static str>,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Replace a field's text. Typing clears that field's error.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        if self.is_sending() {
            return;
        }
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        if self.is_sending() {
            return;
        }
        self.values.entry(field).or_default().push(c);
        self.errors.remove(&field);
    }

    pub fn pop_char(&mut self, field: Field) {
        if self.is_sending() {
            return;
        }
        if let Some(value) = self.values.get_mut(&field) {
            value.pop();
        }
        self.errors.remove(&field);
    }

    /// Validate a single field when focus leaves it. Returns validity.
    pub fn blur(&mut self, field: Field) -> bool {
        match validate_field(field, self.value(field)) {
            Some(error) => {
                self.errors.insert(field, error);
                false
            }
            None => {
                self.errors.remove(&field);
                true
            }
        }
    }

    /// Re-validate every field from scratch. Returns validity.
    pub fn validate_all(&mut self) -> bool {
        self.errors.clear();
        for field in Field::ALL {
            if let Some(error) = validate_field(field, self.value(field)) {
                self.errors.insert(field, error);
            }
        }
        self.errors.is_empty()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_sending() {
            return SubmitOutcome::Busy;
        }
        if !self.validate_all() {
            return SubmitOutcome::Invalid;
        }
        self.status = FormStatus::Sending;
        SubmitOutcome::Sending
    }

    /// Finish a sending submission: clear fields and errors.
    ///
    /// Returns false if no submission was in flight.
    pub fn complete(&mut self) -> bool {
        if !self.is_sending() {
            return false;
        }
        *self = Self::default();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(Field::Name, "Asha Rao");
        form.set_value(Field::Email, "asha@example.com");
        form.set_value(Field::Message, "I need a new logo for my bakery.");
        form
    }

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("missing-at.com"));
        assert!(!is_valid_email("no@tld"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("space @x.com"));
    }

    #[test]
    fn validate_field_messages() {
        assert_eq!(validate_field(Field::Name, "   "), Some("Full name is required"));
        assert_eq!(validate_field(Field::Email, ""), Some("Email address is required"));
        assert_eq!(
            validate_field(Field::Email, "nope"),
            Some("Please enter a valid email address")
        );
        assert_eq!(validate_field(Field::Message, ""), Some("Message is required"));
        assert_eq!(
            validate_field(Field::Message, "too short"),
            Some("Message should be at least 10 characters long")
        );
        assert_eq!(validate_field(Field::Message, "  ten chars!  "), None);
    }

    #[test]
    fn submit_empty_form_reports_every_field() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), SubmitOutcome::Invalid);
        for field in Field::ALL {
            assert!(form.error(field).is_some(), "{field:?} should have an error");
        }
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn typing_clears_only_that_fields_error() {
        let mut form = ContactForm::new();
        form.submit();
        form.push_char(Field::Name, 'A');

        assert_eq!(form.error(Field::Name), None);
        assert!(form.error(Field::Email).is_some());
    }

    #[test]
    fn blur_validates_single_field() {
        let mut form = ContactForm::new();
        form.set_value(Field::Email, "bad");
        assert!(!form.blur(Field::Email));
        assert_eq!(form.error(Field::Email), Some("Please enter a valid email address"));
        assert_eq!(form.error(Field::Name), None);

        form.set_value(Field::Email, "good@site.in");
        assert!(form.blur(Field::Email));
        assert!(!form.has_errors());
    }

    #[test]
    fn valid_submit_locks_form_until_complete() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Sending);
        assert!(form.is_sending());
        assert_eq!(form.submit(), SubmitOutcome::Busy);

        form.push_char(Field::Name, 'x');
        assert_eq!(form.value(Field::Name), "Asha Rao");

        assert!(form.complete());
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(!form.complete());
    }

    #[test]
    fn pop_char_edits_value() {
        let mut form = ContactForm::new();
        form.push_char(Field::Name, 'A');
        form.push_char(Field::Name, 'b');
        form.pop_char(Field::Name);
        assert_eq!(form.value(Field::Name), "A");
    }
}

//! Landing page features: the per-section behavior behind the page.

pub mod content;
pub mod cta;
pub mod effects;
pub mod faq;
pub mod form;
pub mod payment;
pub mod portfolio;
pub mod scroll;

pub use effects::{CounterAnimation, LoadingPhase, LoadingScreen, RevealTracker};
pub use faq::Faq;
pub use form::{ContactForm, Field, SubmitOutcome};
pub use payment::PaymentModal;
pub use portfolio::Portfolio;
pub use scroll::{HeaderState, SectionAnchor};

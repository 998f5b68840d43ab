//! Modal dialog components for the TUI.

pub mod payment;

pub use payment::PaymentModalWidget;

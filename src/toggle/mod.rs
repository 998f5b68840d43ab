//! Open/closed state for groups of togglable page elements.
//!
//! Accordion panels, portfolio filter buttons, the mobile menu and the payment
//! modal all share one model: an ordered set of items, each active or not,
//! governed by a per-group [`ToggleMode`].

use thiserror::Error;

pub mod group;

pub use group::ToggleGroup;

/// Policy deciding how toggling one item affects the others
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleMode {
    /// At most one item is active at a time
    Exclusive,
    /// Items flip without affecting each other
    Independent,
}

/// A single togglable element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    /// Stable identifier (FAQ question key, filter value, ...)
    pub id: String,
    /// Whether the item is currently open/selected
    pub active: bool,
}

impl ToggleItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active: false,
        }
    }
}

/// Errors from toggle group mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The requested id is not part of the group
    #[error("unknown toggle item: {0}")]
    UnknownItem(String),
}

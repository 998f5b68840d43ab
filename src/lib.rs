//! pixelperfect library crate.
//!
//! The landing page for PixelPerfect Graphix as a terminal app:
//! - Toggle groups for the accordion, filters, menu and modal
//! - A notification center with timed auto-dismiss
//! - Page components (portfolio, FAQ, contact form, checkout, scroll effects)
//! - Terminal UI rendering and input handling

pub mod app;
pub mod config;
pub mod debounce;
pub mod event_loop;
pub(crate) mod handlers;
pub mod notify;
pub mod site;
pub mod timer;
pub mod toggle;
pub mod ui;

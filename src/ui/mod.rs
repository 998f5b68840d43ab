//! Terminal UI components: header, page body, overlays and widgets.

pub mod header;
pub mod help_menu;
pub mod layout;
pub mod modal;
pub mod page;
pub mod splash;
pub mod toast_widget;

pub use header::{HeaderWidget, MenuWidget};
pub use help_menu::HelpMenuWidget;
pub use modal::PaymentModalWidget;
pub use splash::SplashWidget;
pub use toast_widget::ToastWidget;

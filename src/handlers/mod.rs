pub(crate) mod keyboard;
pub(crate) mod modal;
pub(crate) mod mouse;

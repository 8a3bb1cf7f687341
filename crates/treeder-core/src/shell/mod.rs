//! Thin adapter between the host runtime's callbacks and the pure shell logic.
//!
//! The host (a platform activity/window) owns the real WebView and forwards
//! its callbacks here; the decisions themselves live in [`crate::navigation`],
//! [`crate::share`], [`crate::target`], and [`crate::assets`].

mod adapter;
mod file_chooser;
mod host;
mod redirect;
mod views;

pub use adapter::Shell;
pub use file_chooser::{
    FileCallback, FileChooserParams, FileChooserRequest, FileChooserSlot, PickerOutcome,
};
pub use host::{SystemOpener, UrlOpener, WebViewHost};
pub use redirect::redirect_share;
pub use views::ViewStack;

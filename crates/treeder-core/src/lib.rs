pub mod config;
pub mod error;
pub mod logging;

// Shell core
pub mod app_registry;
pub mod assets;
pub mod navigation;
pub mod share;
pub mod shell;
pub mod target;

pub use error::ShellError;

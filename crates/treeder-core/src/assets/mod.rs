//! Asset bridge: serves the packaged web bundle under a reserved path prefix
//! of the trusted asset host, straight from disk and never from the network.

mod loader;
mod mime;
mod path;

pub use loader::{AssetLoader, AssetResponse};
pub use mime::mime_for_path;

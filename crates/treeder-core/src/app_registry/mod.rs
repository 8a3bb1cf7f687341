//! OAuth app registration cache.
//!
//! The hosted reader signs in against arbitrary Mastodon instances and needs
//! one registered OAuth application per instance. Registrations are created
//! on first use through the instance's `POST /api/v1/apps` endpoint, cached in
//! memory and persisted as a JSON map keyed by instance host.

mod instance;
mod registrar;
mod registry;

pub use instance::normalize_instance;
pub use registrar::{CurlRegistrar, RegisteredApp, Registrar, RegistrationForm};
pub use registry::{default_apps_path, AppRegistry};

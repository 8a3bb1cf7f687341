//! `treeder app <instance>` – print the OAuth app registered for an instance.

use anyhow::Result;
use std::path::PathBuf;
use treeder_core::app_registry::{default_apps_path, AppRegistry, CurlRegistrar, RegistrationForm};
use treeder_core::config::ShellConfig;

pub async fn run_app(cfg: &ShellConfig, instance: String, apps_file: Option<PathBuf>) -> Result<()> {
    let registry_cfg = cfg.registry_or_default();
    let path = match apps_file.or(registry_cfg.apps_file.clone()) {
        Some(p) => p,
        None => default_apps_path()?,
    };
    let form = RegistrationForm::from_config(&registry_cfg);

    // libcurl is blocking.
    let app = tokio::task::spawn_blocking(move || {
        let mut registry = AppRegistry::open(path, CurlRegistrar, form);
        tracing::debug!(apps_file = %registry.path().display(), cached = registry.len(), "app registry ready");
        registry.request(&instance)
    })
    .await??;

    println!("{}", serde_json::to_string_pretty(&app)?);
    Ok(())
}

//! In-memory registration cache with JSON persistence.

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::instance::normalize_instance;
use super::registrar::{RegisteredApp, Registrar, RegistrationForm};
use crate::error::ShellError;

/// Registered apps keyed by instance host, backed by a JSON file.
#[derive(Debug)]
pub struct AppRegistry<R> {
    path: PathBuf,
    apps: BTreeMap<String, RegisteredApp>,
    registrar: R,
    form: RegistrationForm,
}

/// Default apps file: `~/.local/state/treeder/apps.json`.
pub fn default_apps_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("treeder")?;
    Ok(xdg_dirs.get_state_home().join("apps.json"))
}

impl<R: Registrar> AppRegistry<R> {
    /// Loads stored apps from `path`. A missing or unreadable file is logged
    /// and the registry starts empty.
    pub fn open(path: impl Into<PathBuf>, registrar: R, form: RegistrationForm) -> Self {
        let path = path.into();
        tracing::info!(path = %path.display(), "reading stored apps");
        let apps = match load_apps(&path) {
            Ok(apps) => apps,
            Err(e) => {
                tracing::warn!(path = %path.display(), "error reading stored apps: {}", e);
                BTreeMap::new()
            }
        };
        tracing::info!(count = apps.len(), "loaded stored apps");
        for instance in apps.keys() {
            tracing::debug!(instance = %instance, "loaded stored app");
        }
        Self {
            path,
            apps,
            registrar,
            form,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Cached app for an instance (normalised), without contacting it.
    pub fn get(&self, instance: &str) -> Option<&RegisteredApp> {
        let instance = normalize_instance(instance).ok()?;
        self.apps.get(&instance)
    }

    /// Returns the app for `instance`, registering one if none is cached.
    ///
    /// A fresh registration is persisted right away; failing to write the apps
    /// file is only logged, the registration itself is still returned.
    pub fn request(&mut self, instance: &str) -> Result<RegisteredApp, ShellError> {
        let instance = normalize_instance(instance)?;
        let span = tracing::info_span!("app_request", instance = %instance);
        let _enter = span.enter();
        tracing::info!("got request for app");

        if let Some(app) = self.apps.get(&instance) {
            tracing::info!("app found in cache");
            return Ok(app.clone());
        }

        tracing::info!("no app in cache, requesting from remote");
        let app = self
            .registrar
            .register(&instance, &self.form)
            .map_err(|e| {
                tracing::error!("error while handling request: {}", e);
                e
            })?;

        tracing::info!("got response from remote, storing");
        self.apps.insert(instance, app.clone());
        if let Err(e) = self.save() {
            tracing::warn!(path = %self.path.display(), "error writing apps to file: {}", e);
        }
        Ok(app)
    }

    /// Writes all apps to the backing file (creates parent dir if needed).
    pub fn save(&self) -> Result<(), ShellError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(&self.apps)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

fn load_apps(path: &Path) -> Result<BTreeMap<String, RegisteredApp>, ShellError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::error::ShellError;

/// Deployment shape of the shell.
///
/// `Embedded` hosts a WebView over the packaged asset bundle; `Redirect` has no
/// WebView and hands the destination straight to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Embedded,
    Redirect,
}

/// OAuth app registration settings (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// JSON file caching registered apps per instance. Defaults to the XDG state dir.
    #[serde(default)]
    pub apps_file: Option<PathBuf>,
    pub client_name: String,
    pub website: String,
    pub redirect_uri: String,
    pub scopes: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            apps_file: None,
            client_name: "Tree Reader".to_string(),
            website: "https://iliazeus.lol/mastodon-tree-reader/thread.html".to_string(),
            redirect_uri: "https://iliazeus.lol/mastodon-tree-reader/thread.html".to_string(),
            scopes: "read".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/treeder/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// "embedded" (default) or "redirect".
    #[serde(default)]
    pub shape: Shape,
    /// Query parameter carrying the shared URL. Older builds used "url".
    pub query_param: String,
    /// Virtual hostname the WebView asset bridge is served from.
    pub asset_host: String,
    /// Path of the entry page under the asset host.
    pub asset_entry_path: String,
    /// Path prefix served from the packaged bundle.
    pub asset_prefix: String,
    /// Directory holding the packaged bundle (the files under `asset_prefix`).
    #[serde(default)]
    pub asset_dir: Option<PathBuf>,
    /// Externally hosted page used by the redirect shape.
    pub hosted_app_url: String,
    /// Path that must complete inside the app (never handed to the OS).
    pub oauth_callback_path: String,
    #[serde(default)]
    pub registry: Option<RegistryConfig>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Embedded,
            query_param: "post".to_string(),
            asset_host: "appassets.androidplatform.net".to_string(),
            asset_entry_path: "/assets/index.html".to_string(),
            asset_prefix: "/assets/".to_string(),
            asset_dir: None,
            hosted_app_url: "https://iliazeus.lol/mastodon-tree-reader/".to_string(),
            oauth_callback_path: "/oauth/authorize".to_string(),
            registry: None,
        }
    }
}

impl ShellConfig {
    /// `https://<asset_host><asset_entry_path>`.
    pub fn asset_entry_url(&self) -> Result<Url, ShellError> {
        parse_base(&format!("https://{}{}", self.asset_host, self.asset_entry_path))
    }

    pub fn hosted_app_base(&self) -> Result<Url, ShellError> {
        parse_base(&self.hosted_app_url)
    }

    /// Base URL for the configured shape.
    pub fn base_url(&self) -> Result<Url, ShellError> {
        match self.shape {
            Shape::Embedded => self.asset_entry_url(),
            Shape::Redirect => self.hosted_app_base(),
        }
    }

    pub fn registry_or_default(&self) -> RegistryConfig {
        self.registry.clone().unwrap_or_default()
    }

    /// Check that both base URLs parse and the asset prefix is a directory-style path.
    pub fn validate(&self) -> Result<()> {
        self.asset_entry_url()?;
        self.hosted_app_base()?;
        if !self.asset_prefix.starts_with('/') || !self.asset_prefix.ends_with('/') {
            anyhow::bail!(
                "asset_prefix must start and end with '/', got {:?}",
                self.asset_prefix
            );
        }
        if self.query_param.is_empty() {
            anyhow::bail!("query_param must not be empty");
        }
        Ok(())
    }
}

fn parse_base(raw: &str) -> Result<Url, ShellError> {
    Url::parse(raw).map_err(|source| ShellError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("treeder")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShellConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ShellConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ShellConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

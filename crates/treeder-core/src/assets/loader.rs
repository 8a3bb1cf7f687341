//! Request interception against the on-disk bundle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

use super::mime::mime_for_path;
use super::path::bundle_relative;
use crate::config::ShellConfig;

/// Response produced for an intercepted asset request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetResponse {
    Found { mime: &'static str, body: Vec<u8> },
    NotFound,
}

impl AssetResponse {
    pub fn status(&self) -> u16 {
        match self {
            AssetResponse::Found { .. } => 200,
            AssetResponse::NotFound => 404,
        }
    }
}

/// Serves `https://<host><prefix>...` from files under `root`.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    host: String,
    prefix: String,
    root: PathBuf,
}

impl AssetLoader {
    pub fn new(host: impl Into<String>, prefix: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            host: host.into().to_ascii_lowercase(),
            prefix: prefix.into(),
            root: root.into(),
        }
    }

    /// Loader for the configured bundle, or `None` when no `asset_dir` is set.
    pub fn from_config(cfg: &ShellConfig) -> Option<Self> {
        let root = cfg.asset_dir.as_ref()?;
        Some(Self::new(
            cfg.asset_host.clone(),
            cfg.asset_prefix.clone(),
            root.clone(),
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `None` when the request is not for the bundle and should load
    /// normally. Requests under the prefix never touch the network: unknown or
    /// unreadable files yield [`AssetResponse::NotFound`].
    pub fn should_intercept(&self, url: &Url) -> Option<AssetResponse> {
        if url.scheme() != "https" || url.host_str() != Some(self.host.as_str()) {
            return None;
        }
        let rest = url.path().strip_prefix(self.prefix.as_str())?;

        let relative = match bundle_relative(rest) {
            Some(r) => r,
            None => {
                tracing::debug!(path = url.path(), "asset path rejected");
                return Some(AssetResponse::NotFound);
            }
        };

        let full = self.root.join(&relative);
        match read_file(&full) {
            Ok(Some(body)) => Some(AssetResponse::Found {
                mime: mime_for_path(&relative),
                body,
            }),
            Ok(None) => {
                tracing::debug!(path = %full.display(), "asset not found");
                Some(AssetResponse::NotFound)
            }
            Err(e) => {
                tracing::warn!(path = %full.display(), "asset read failed: {}", e);
                Some(AssetResponse::NotFound)
            }
        }
    }
}

/// Reads a regular file; `Ok(None)` for missing paths and directories.
fn read_file(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => fs::read(path).map(Some),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

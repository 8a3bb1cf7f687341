//! Destination URL composition.
//!
//! The shared URL is only ever carried as data in a query parameter of a
//! trusted base URL; it is never navigated to directly.

use url::Url;

use crate::config::ShellConfig;
use crate::error::ShellError;

/// Fixed base URL plus the name of the query parameter that carries the
/// extracted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    base: Url,
    param: String,
}

impl NavigationTarget {
    pub fn new(base: Url, param: impl Into<String>) -> Self {
        Self {
            base,
            param: param.into(),
        }
    }

    /// Target for the configured shape (asset entry page or hosted app).
    pub fn from_config(cfg: &ShellConfig) -> Result<Self, ShellError> {
        Ok(Self::new(cfg.base_url()?, cfg.query_param.clone()))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// Builds the destination: the base unchanged when nothing was extracted,
    /// otherwise the base with `param=<percent-encoded url>` appended.
    pub fn build(&self, extracted: Option<&str>) -> Url {
        let mut dest = self.base.clone();
        if let Some(shared) = extracted {
            dest.query_pairs_mut().append_pair(&self.param, shared);
        }
        dest
    }
}

//! Classification rules.

use url::Url;

use super::NavigationRequest;
use crate::config::ShellConfig;

/// Hosts and paths the shell treats as belonging to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedHosts {
    pub asset_host: String,
    pub oauth_callback_path: String,
}

impl TrustedHosts {
    /// `asset_host` is stored lowercased, the form `Url` reports hosts in.
    pub fn new(asset_host: impl Into<String>, oauth_callback_path: impl Into<String>) -> Self {
        Self {
            asset_host: asset_host.into().to_ascii_lowercase(),
            oauth_callback_path: oauth_callback_path.into(),
        }
    }

    pub fn from_config(cfg: &ShellConfig) -> Self {
        Self::new(cfg.asset_host.clone(), cfg.oauth_callback_path.clone())
    }

    /// URLs without a host (`mailto:`, `data:`) never count as the asset host.
    pub fn is_asset_host(&self, url: &Url) -> bool {
        url.host_str() == Some(self.asset_host.as_str())
    }

    pub fn is_oauth_callback(&self, url: &Url) -> bool {
        url.path() == self.oauth_callback_path
    }
}

/// Outcome of classifying a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Load the URL again inside the WebView instead of following the redirect.
    ReloadInWebView(Url),
    /// Hand the URL to the OS default opener.
    OpenExternally(Url),
    /// Let the WebView proceed with its default handling.
    Continue,
}

impl NavigationDecision {
    /// True when the shell took over the request.
    pub fn is_handled(&self) -> bool {
        !matches!(self, NavigationDecision::Continue)
    }
}

/// Decides what to do with a navigation request. Rules apply in order; the
/// first that matches wins.
pub fn classify(req: &NavigationRequest, trusted: &TrustedHosts) -> NavigationDecision {
    let is_asset = trusted.is_asset_host(&req.url);

    // WebView redirect handling would bypass the asset bridge.
    if req.is_redirect && is_asset {
        return NavigationDecision::ReloadInWebView(req.url.clone());
    }

    if req.is_main_frame
        && req.has_gesture
        && !is_asset
        && !trusted.is_oauth_callback(&req.url)
    {
        return NavigationDecision::OpenExternally(req.url.clone());
    }

    NavigationDecision::Continue
}

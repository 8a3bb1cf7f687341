//! Callback adapter for the embedded shape.

use url::Url;

use super::file_chooser::{FileCallback, FileChooserParams, FileChooserRequest, FileChooserSlot, PickerOutcome};
use super::host::{UrlOpener, WebViewHost};
use super::views::ViewStack;
use crate::assets::{AssetLoader, AssetResponse};
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::navigation::{classify, NavigationDecision, NavigationRequest, TrustedHosts};
use crate::share::ShareIntent;
use crate::target::NavigationTarget;

/// Embedded-shape shell window: one WebView over the packaged bundle.
///
/// `W` is the platform WebView, `O` the OS URL opener and `V` whatever the
/// host uses for custom (fullscreen) views.
pub struct Shell<W, O, V> {
    webview: W,
    opener: O,
    entry: NavigationTarget,
    trusted: TrustedHosts,
    assets: Option<AssetLoader>,
    overlays: ViewStack<V>,
    file_chooser: FileChooserSlot,
    started: bool,
}

impl<W: WebViewHost, O: UrlOpener, V> Shell<W, O, V> {
    pub fn new(
        webview: W,
        opener: O,
        entry: NavigationTarget,
        trusted: TrustedHosts,
        assets: Option<AssetLoader>,
    ) -> Self {
        Self {
            webview,
            opener,
            entry,
            trusted,
            assets,
            overlays: ViewStack::new(),
            file_chooser: FileChooserSlot::new(),
            started: false,
        }
    }

    pub fn from_config(cfg: &ShellConfig, webview: W, opener: O) -> Result<Self, ShellError> {
        let entry = NavigationTarget::new(cfg.asset_entry_url()?, cfg.query_param.clone());
        Ok(Self::new(
            webview,
            opener,
            entry,
            TrustedHosts::from_config(cfg),
            AssetLoader::from_config(cfg),
        ))
    }

    pub fn webview(&self) -> &W {
        &self.webview
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn overlays(&self) -> &ViewStack<V> {
        &self.overlays
    }

    /// Handles the intent the window was (re)created with.
    ///
    /// The entry page is loaded once per WebView. A share intent then loads the
    /// entry page again with the extracted URL attached and clears history so
    /// back does not land on the bare entry page. Returns the last URL loaded.
    pub fn on_create(&mut self, intent: &ShareIntent) -> Url {
        let mut current = self.entry.base().clone();
        if !self.started {
            tracing::debug!(url = %current, "loading entry page");
            self.webview.load_url(&current);
            self.started = true;
        }

        if intent.is_share() {
            current = self.entry.build(intent.extracted_url());
            tracing::info!(url = %current, "loading shared post");
            self.webview.load_url(&current);
            self.webview.clear_history();
        }
        current
    }

    /// Navigation callback. Returns true when the shell handled the request
    /// and the WebView must not continue with it.
    pub fn should_override_url_loading(&mut self, req: &NavigationRequest) -> bool {
        let decision = classify(req, &self.trusted);
        tracing::debug!(url = %req.url, ?decision, "navigation classified");
        match &decision {
            NavigationDecision::ReloadInWebView(url) => self.webview.load_url(url),
            NavigationDecision::OpenExternally(url) => {
                if let Err(e) = self.opener.open(url) {
                    tracing::warn!(%url, "external open failed: {}", e);
                }
            }
            NavigationDecision::Continue => {}
        }
        decision.is_handled()
    }

    /// Resource callback. `None` lets the WebView load the resource itself.
    pub fn should_intercept_request(&self, url: &Url) -> Option<AssetResponse> {
        self.assets.as_ref()?.should_intercept(url)
    }

    /// Back key. Returns true when the event was consumed.
    pub fn on_back_pressed(&mut self) -> bool {
        if self.webview.can_go_back() {
            self.webview.go_back();
            true
        } else {
            false
        }
    }

    pub fn on_show_custom_view(&mut self, view: V) {
        self.overlays.show(view);
    }

    pub fn on_hide_custom_view(&mut self) -> Option<V> {
        self.overlays.hide()
    }

    /// The page asked for a file; the returned request goes to the platform picker.
    pub fn on_show_file_chooser(
        &mut self,
        params: FileChooserParams,
        callback: FileCallback,
    ) -> Result<FileChooserRequest, ShellError> {
        self.file_chooser.begin(params, callback)
    }

    /// The platform picker finished.
    pub fn on_file_chooser_result(
        &mut self,
        request_code: u32,
        outcome: PickerOutcome,
    ) -> Result<(), ShellError> {
        self.file_chooser.complete(request_code, outcome)
    }
}

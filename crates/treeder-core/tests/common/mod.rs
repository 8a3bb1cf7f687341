//! In-memory stand-ins for the platform WebView and URL opener.

#![allow(dead_code)]

use treeder_core::shell::{UrlOpener, WebViewHost};
use treeder_core::ShellError;
use url::Url;

/// Records every load and keeps a simple back stack.
#[derive(Debug, Default)]
pub struct FakeWebView {
    pub loads: Vec<Url>,
    pub history: Vec<Url>,
    pub cleared: u32,
}

impl FakeWebView {
    pub fn current(&self) -> Option<&Url> {
        self.history.last()
    }
}

impl WebViewHost for FakeWebView {
    fn load_url(&mut self, url: &Url) {
        self.loads.push(url.clone());
        self.history.push(url.clone());
    }

    fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    fn go_back(&mut self) {
        self.history.pop();
    }

    fn clear_history(&mut self) {
        let current = self.history.pop();
        self.history.clear();
        self.history.extend(current);
        self.cleared += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<Url>,
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, url: &Url) -> Result<(), ShellError> {
        self.opened.push(url.clone());
        Ok(())
    }
}

/// Writes a small bundle (`index.html`, `js/app.js`) into `dir`.
pub fn write_bundle(dir: &std::path::Path) {
    std::fs::write(dir.join("index.html"), "<!doctype html><title>reader</title>").unwrap();
    std::fs::create_dir_all(dir.join("js")).unwrap();
    std::fs::write(dir.join("js").join("app.js"), "console.log('hi')").unwrap();
}

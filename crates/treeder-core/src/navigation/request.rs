//! Observed navigation request.

use url::Url;

/// An attempted resource load as reported by the WebView.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: Url,
    /// The load is the result of a server or script redirect.
    pub is_redirect: bool,
    /// The load targets the top-level frame.
    pub is_main_frame: bool,
    /// The load was triggered by direct user input.
    pub has_gesture: bool,
}

impl NavigationRequest {
    /// A plain sub-frame, non-redirect, non-gestured request.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            is_redirect: false,
            is_main_frame: false,
            has_gesture: false,
        }
    }

    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?))
    }

    pub fn redirect(mut self, yes: bool) -> Self {
        self.is_redirect = yes;
        self
    }

    pub fn main_frame(mut self, yes: bool) -> Self {
        self.is_main_frame = yes;
        self
    }

    pub fn gesture(mut self, yes: bool) -> Self {
        self.has_gesture = yes;
        self
    }
}

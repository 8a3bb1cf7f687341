//! Navigation policy for the embedded WebView.
//!
//! Every main-frame request and redirect the WebView observes is classified
//! here, without touching any host runtime type:
//! - redirects onto the asset host are reloaded inside the WebView
//! - deliberate clicks on outbound links go to the OS URL opener
//! - everything else (asset pages, programmatic loads, the OAuth callback)
//!   keeps the WebView's default handling

mod policy;
mod request;

pub use policy::{classify, NavigationDecision, TrustedHosts};
pub use request::NavigationRequest;

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET_HOST: &str = "appassets.androidplatform.net";

    fn hosts() -> TrustedHosts {
        TrustedHosts::new(ASSET_HOST, "/oauth/authorize")
    }

    fn decide(req: NavigationRequest) -> NavigationDecision {
        classify(&req, &hosts())
    }

    #[test]
    fn redirect_to_asset_host_is_reloaded() {
        let req = NavigationRequest::parse("https://appassets.androidplatform.net/assets/index.html")
            .unwrap()
            .redirect(true);
        let decision = decide(req);
        assert!(decision.is_handled());
        assert!(matches!(decision, NavigationDecision::ReloadInWebView(_)));
    }

    #[test]
    fn gestured_external_link_goes_to_os() {
        let req = NavigationRequest::parse("https://external.com/")
            .unwrap()
            .main_frame(true)
            .gesture(true);
        let decision = decide(req);
        assert!(decision.is_handled());
        match decision {
            NavigationDecision::OpenExternally(url) => {
                assert_eq!(url.as_str(), "https://external.com/")
            }
            other => panic!("expected OpenExternally, got {other:?}"),
        }
    }

    #[test]
    fn oauth_callback_stays_in_app() {
        let req = NavigationRequest::parse("https://appassets.androidplatform.net/oauth/authorize")
            .unwrap()
            .main_frame(true)
            .gesture(true);
        assert_eq!(decide(req), NavigationDecision::Continue);
    }

    #[test]
    fn non_gestured_external_is_not_handled() {
        let req = NavigationRequest::parse("https://external.com/")
            .unwrap()
            .main_frame(true);
        assert_eq!(decide(req), NavigationDecision::Continue);
    }
}

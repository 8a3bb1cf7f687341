//! `treeder classify <url>` – run the navigation policy on one request.

use anyhow::{Context, Result};
use treeder_core::config::ShellConfig;
use treeder_core::navigation::{classify, NavigationDecision, NavigationRequest, TrustedHosts};

pub fn run_classify(
    cfg: &ShellConfig,
    url: &str,
    redirect: bool,
    main_frame: bool,
    gesture: bool,
) -> Result<()> {
    let req = NavigationRequest::parse(url)
        .with_context(|| format!("invalid URL: {url}"))?
        .redirect(redirect)
        .main_frame(main_frame)
        .gesture(gesture);
    let decision = classify(&req, &TrustedHosts::from_config(cfg));
    match decision {
        NavigationDecision::ReloadInWebView(u) => println!("reload {u}"),
        NavigationDecision::OpenExternally(u) => println!("open-external {u}"),
        NavigationDecision::Continue => println!("continue"),
    }
    Ok(())
}

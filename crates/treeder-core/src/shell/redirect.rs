//! Redirect-only shape: no WebView, straight hand-off to the hosted app.

use url::Url;

use super::host::UrlOpener;
use crate::error::ShellError;
use crate::share::ShareIntent;
use crate::target::NavigationTarget;

/// Builds the hosted-app destination for `intent` and opens it with the OS.
///
/// Returns the URL that was opened; the caller is expected to exit afterwards.
pub fn redirect_share<O: UrlOpener>(
    hosted: &NavigationTarget,
    intent: &ShareIntent,
    opener: &mut O,
) -> Result<Url, ShellError> {
    let extracted = intent.extracted_url();
    if intent.is_share() && extracted.is_none() {
        tracing::info!("shared text carried no url; opening hosted app without it");
    }
    let dest = hosted.build(extracted);
    opener.open(&dest)?;
    Ok(dest)
}

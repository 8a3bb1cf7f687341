//! Instance name normalisation.

use crate::error::ShellError;

/// Strips one `http://` or `https://` prefix and one trailing `/`.
///
/// `"https://mastodon.social/"` and `"mastodon.social"` name the same
/// instance. An empty result is [`ShellError::MissingInstance`].
pub fn normalize_instance(raw: &str) -> Result<String, ShellError> {
    let s = raw.trim();
    let s = s
        .strip_prefix("http://")
        .or_else(|| s.strip_prefix("https://"))
        .unwrap_or(s);
    let s = s.strip_suffix('/').unwrap_or(s);
    if s.is_empty() {
        return Err(ShellError::MissingInstance);
    }
    Ok(s.to_string())
}

//! Heuristic URL extraction from shared text.

use regex::Regex;
use std::sync::OnceLock;

/// Loose URL pattern (after @stephenhay's entry in mathiasbynens' URL regex
/// comparison). Known to be imprecise; downstream composition depends on its
/// literal matches, so keep it as is.
///
/// The second host character is "any character but a line terminator", with
/// CR, NEL, LS and PS counted as terminators alongside LF.
const URL_PATTERN: &str = r"(?i)https?://[^\s/$.?#][^\n\r\x{85}\x{2028}\x{2029}][^\s]*";

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"))
}

/// Returns the first URL-looking substring of `text`, verbatim.
///
/// No decoding, normalisation, or validation is applied: anything matching the
/// pattern is returned as found, and only the first match is considered.
pub fn extract_url(text: Option<&str>) -> Option<&str> {
    let text = text?;
    url_regex().find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_input() {
        assert_eq!(extract_url(None), None);
    }

    #[test]
    fn no_scheme_no_match() {
        assert_eq!(extract_url(Some("")), None);
        assert_eq!(extract_url(Some("see example.com/page")), None);
        assert_eq!(extract_url(Some("ftp://example.com/file")), None);
    }

    #[test]
    fn url_inside_sentence() {
        assert_eq!(
            extract_url(Some("check this out http://example.com/a?b=1 thanks")),
            Some("http://example.com/a?b=1")
        );
    }

    #[test]
    fn first_of_many() {
        assert_eq!(
            extract_url(Some("http://a.com http://b.com")),
            Some("http://a.com")
        );
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(
            extract_url(Some("HTTPS://Example.COM/X")),
            Some("HTTPS://Example.COM/X")
        );
    }

    #[test]
    fn rejected_host_starts() {
        assert_eq!(extract_url(Some("http:///path")), None);
        assert_eq!(extract_url(Some("http://.example.com")), None);
        assert_eq!(extract_url(Some("http://?q")), None);
        assert_eq!(extract_url(Some("http://#frag")), None);
        assert_eq!(extract_url(Some("http://$x")), None);
        assert_eq!(extract_url(Some("http:// example.com")), None);
    }

    #[test]
    fn needs_two_host_characters() {
        assert_eq!(extract_url(Some("http://a")), None);
        assert_eq!(extract_url(Some("http://ab")), Some("http://ab"));
    }

    #[test]
    fn loose_matches_are_kept_verbatim() {
        // Trailing punctuation and odd hosts pass through unchanged.
        assert_eq!(
            extract_url(Some("(see https://x.y/z).")),
            Some("https://x.y/z).")
        );
        assert_eq!(
            extract_url(Some("http://a/ http://b.com")),
            Some("http://a/")
        );
        assert_eq!(
            extract_url(Some("https://ex%20ample.com/%41")),
            Some("https://ex%20ample.com/%41")
        );
    }

    #[test]
    fn stops_at_whitespace() {
        assert_eq!(
            extract_url(Some("https://example.com/a\nnext line")),
            Some("https://example.com/a")
        );
        assert_eq!(
            extract_url(Some("https://example.com/a\tb")),
            Some("https://example.com/a")
        );
    }

    #[test]
    fn stops_at_line_terminators() {
        assert_eq!(extract_url(Some("http://a\rb")), None);
        assert_eq!(extract_url(Some("http://a\u{85}b")), None);
        assert_eq!(extract_url(Some("http://a\u{2028}b")), None);
        assert_eq!(extract_url(Some("http://a\u{2029}b")), None);
        assert_eq!(extract_url(Some("http://ab\r\nmore")), Some("http://ab"));
        assert_eq!(extract_url(Some("http://ab\u{2028}more")), Some("http://ab"));
    }

    #[test]
    fn repeated_calls_agree() {
        let text = Some("go to https://host.example/thread/42 now");
        assert_eq!(extract_url(text), extract_url(text));
    }
}

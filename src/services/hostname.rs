//! Hostname projection for bookmark display.

use url::Url;

/// Returns the host component of `url`, or an empty string when there is none.
///
/// Pure and infallible: malformed input and host-less URLs such as
/// `mailto:` links both yield `""`.
pub fn extract_hostname(url: &str) -> String {
    Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}

//! Page title fetching for new bookmarks.
//!
//! [`HttpTitleFetcher`] performs a blocking GET and pulls the first `<title>`
//! element out of the response body. The store only depends on the
//! [`TitleFetcher`] trait, so tests substitute their own implementation.

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::types::errors::FetchError;
use crate::types::settings::FetchSettings;

/// Resolves a display title for a URL.
pub trait TitleFetcher {
    fn fetch_title(&self, url: &str) -> Result<String, FetchError>;
}

/// Title fetcher backed by a blocking `reqwest` client.
pub struct HttpTitleFetcher {
    client: Client,
}

impl HttpTitleFetcher {
    /// Builds the HTTP client with the configured timeout and user agent.
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl TitleFetcher for HttpTitleFetcher {
    fn fetch_title(&self, url: &str) -> Result<String, FetchError> {
        let parsed =
            Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                url,
                parsed.scheme()
            )));
        }

        debug!(url, "fetching page title");
        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_title(&body).ok_or_else(|| FetchError::MissingTitle(url.to_string()))
    }
}

/// Extracts the first `<title>` element from an HTML document.
///
/// Tag matching is ASCII case-insensitive. Whitespace runs collapse to a single
/// space and common entities are decoded. Returns `None` when the element is
/// missing, unterminated, or blank.
pub fn parse_title(html: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lower = html.to_ascii_lowercase();
    let mut search_from = 0;

    let content_start = loop {
        let open = search_from + lower[search_from..].find("<title")?;
        let after_name = open + "<title".len();
        match lower.as_bytes().get(after_name) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'/') => {
                let tag_end = after_name + lower[after_name..].find('>')?;
                break tag_end + 1;
            }
            // `<titlefoo>` or similar
            _ => search_from = after_name,
        }
    };

    let content_end = content_start + lower[content_start..].find("</title")?;
    let raw = &html[content_start..content_end];

    let collapsed = decode_entities(raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Decodes named entities commonly found in titles plus numeric references.
/// Unknown entities are left untouched.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        let decoded = candidate
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&candidate[1..semi]).map(|ch| (ch, semi)));

        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &candidate[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let numeric = name.strip_prefix('#')?;
            let code = match numeric.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

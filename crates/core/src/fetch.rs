//! Page fetching and character-set decoding.
//!
//! This module retrieves the raw page body and turns it into text by
//! trying a small ordered list of candidate encodings; the first candidate
//! that decodes without malformed sequences wins.

use encoding_rs::Encoding;

use crate::{OcherkError, Result};

/// HTTP client and decoding configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
    /// Candidate encoding labels, tried in order.
    pub encodings: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Ocherk/1.0; +https://github.com/stormlightlabs/ocherk)".to_string(),
            encodings: vec!["utf-8".to_string(), "windows-1251".to_string()],
        }
    }
}

/// Fetches a page and decodes its body through the candidate encodings.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and uses
/// a browser-like User-Agent for better compatibility. The raw bytes are
/// decoded by [`decode_body`] rather than by the response's own charset
/// handling, since the candidate list is the contract here.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    use std::time::Duration;

    use reqwest::Client;
    use url::Url;

    let parsed_url = Url::parse(url).map_err(|e| OcherkError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(OcherkError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(OcherkError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "ru-RU,ru;q=0.9,en;q=0.5")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                OcherkError::Timeout { timeout: config.timeout }
            } else {
                OcherkError::HttpError(e)
            }
        })?;

    let body = response.bytes().await?;

    decode_body(&body, &config.encodings)
}

/// Decode raw page bytes by trying each candidate encoding in order.
///
/// A candidate label that names no known encoding, or that decodes with
/// malformed sequences, is logged and skipped. Exhausting the whole list is
/// an explicit [`OcherkError::Decoding`] rather than a silent garbage
/// result. Note that single-byte code pages like windows-1251 accept every
/// byte, so a list ending in one never exhausts.
pub fn decode_body(bytes: &[u8], encodings: &[String]) -> Result<String> {
    for label in encodings {
        let Some(encoding) = Encoding::for_label(label.as_bytes()) else {
            eprintln!("Warning: unknown encoding label: {}", label);
            continue;
        };

        let (text, _, malformed) = encoding.decode(bytes);
        if !malformed {
            return Ok(text.into_owned());
        }
        eprintln!("Warning: {} produced malformed sequences, trying next candidate", label);
    }

    Err(OcherkError::Decoding { tried: encodings.join(", ") })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Ocherk"));
        assert_eq!(config.encodings, vec!["utf-8", "windows-1251"]);
    }

    #[test]
    fn test_decode_utf8_first() {
        let bytes = "Заголовок статьи".as_bytes();
        let text = decode_body(bytes, &FetchConfig::default().encodings).unwrap();
        assert_eq!(text, "Заголовок статьи");
    }

    #[test]
    fn test_decode_falls_back_to_cp1251() {
        // "Привет" in windows-1251 is not valid UTF-8.
        let bytes: &[u8] = &[0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];
        let text = decode_body(bytes, &FetchConfig::default().encodings).unwrap();
        assert_eq!(text, "Привет");
    }

    #[test]
    fn test_decode_exhausted_candidates() {
        let bytes: &[u8] = &[0xFF, 0xFE, 0xFD];
        let result = decode_body(bytes, &["utf-8".to_string()]);
        assert!(matches!(result, Err(OcherkError::Decoding { .. })));
    }

    #[test]
    fn test_decode_skips_unknown_label() {
        let bytes = "текст".as_bytes();
        let encodings = vec!["koi9-unknown".to_string(), "utf-8".to_string()];
        assert_eq!(decode_body(bytes, &encodings).unwrap(), "текст");
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_url("not-a-url", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(OcherkError::InvalidUrl(_))));
    }
}

//! Machine translation of foreign-language article text.
//!
//! # Architecture
//!
//! The module uses a trait-based design for flexibility:
//! - [`Translate`]: core trait for translating text between two languages
//! - [`GoogleTranslator`]: implementation over the unauthenticated Google
//!   Translate web endpoint
//! - [`translate_or_original`]: best-effort wrapper used by the pipeline
//!
//! # Degradation
//!
//! Translation is cosmetic for this digest, so failure is never allowed to
//! propagate past this module: any error is logged and the original text
//! substituted. An outage produces a partially-untranslated digest, not a
//! failed run. The wrapper is per-call, so one failed field leaves sibling
//! fields and articles untouched.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{instrument, warn};
use url::Url;

/// Errors from a single translation call.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Transport-level failure (connection, TLS, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("translation endpoint returned {0}")]
    Status(reqwest::StatusCode),

    /// The response body didn't carry the expected segment array.
    #[error("unexpected response shape")]
    Malformed,
}

/// Trait for translating text between two languages.
///
/// Language tags are explicit on every call rather than baked into the
/// implementation, so adding a third language later is a call-site change,
/// not a contract change. Implementors are injected generically, which
/// lets tests substitute deterministic or failing translators.
pub trait Translate {
    /// Translate `text` from `source` to `dest` (ISO 639-1 tags).
    async fn translate(&self, text: &str, source: &str, dest: &str)
    -> Result<String, TranslateError>;
}

/// Production endpoint of the unauthenticated Google Translate web API.
pub const GOOGLE_TRANSLATE_ENDPOINT: &str =
    "https://translate.googleapis.com/translate_a/single";

/// Translator over the free `translate_a/single` web endpoint.
///
/// The endpoint answers with a nested JSON array; the first element is a
/// list of `[translated, original, ...]` segments which are concatenated
/// to form the full translation.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    http: Client,
    endpoint: Url,
}

impl GoogleTranslator {
    /// Create a translator against the production endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(
            Url::parse(GOOGLE_TRANSLATE_ENDPOINT).expect("static endpoint URL is valid"),
        )
    }

    /// Create a translator against a custom endpoint. Used by tests to
    /// point the translator at a local mock server.
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translate for GoogleTranslator {
    #[instrument(level = "debug", skip(self, text))]
    async fn translate(
        &self,
        text: &str,
        source: &str,
        dest: &str,
    ) -> Result<String, TranslateError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status));
        }

        let payload: Value = response.json().await?;
        let segments = payload
            .get(0)
            .and_then(Value::as_array)
            .ok_or(TranslateError::Malformed)?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(piece) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(piece);
            }
        }
        if translated.is_empty() {
            return Err(TranslateError::Malformed);
        }
        Ok(translated)
    }
}

/// Translate `text`, falling back to the input on any failure.
///
/// Empty input short-circuits without a network call.
pub async fn translate_or_original<T: Translate>(
    translator: &T,
    text: &str,
    source: &str,
    dest: &str,
) -> String {
    if text.is_empty() {
        return String::new();
    }
    match translator.translate(text, source, dest).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!(error = %e, "Translation failed; keeping original text");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    /// Translator that always fails, for degradation tests.
    struct BrokenTranslator;

    impl Translate for BrokenTranslator {
        async fn translate(
            &self,
            _text: &str,
            _source: &str,
            _dest: &str,
        ) -> Result<String, TranslateError> {
            Err(TranslateError::Malformed)
        }
    }

    #[tokio::test]
    async fn test_google_translator_concatenates_segments() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .query_param("client", "gtx")
                .query_param("sl", "en")
                .query_param("tl", "ko")
                .query_param("q", "mobile device news");
            then.status(200).json_body(serde_json::json!([
                [
                    ["모바일 기기 ", "mobile device ", null, null],
                    ["뉴스", "news", null, null]
                ],
                null,
                "en"
            ]));
        });

        let translator =
            GoogleTranslator::with_endpoint(Url::parse(&server.url("/")).unwrap());
        let out = translator
            .translate("mobile device news", "en", "ko")
            .await
            .unwrap();
        mock.assert();
        assert_eq!(out, "모바일 기기 뉴스");
    }

    #[tokio::test]
    async fn test_google_translator_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(serde_json::json!({"weird": true}));
        });

        let translator =
            GoogleTranslator::with_endpoint(Url::parse(&server.url("/")).unwrap());
        let err = translator.translate("hello", "en", "ko").await.unwrap_err();
        assert!(matches!(err, TranslateError::Malformed));
    }

    #[tokio::test]
    async fn test_google_translator_surfaces_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(429);
        });

        let translator =
            GoogleTranslator::with_endpoint(Url::parse(&server.url("/")).unwrap());
        let err = translator.translate("hello", "en", "ko").await.unwrap_err();
        assert!(matches!(err, TranslateError::Status(_)));
    }

    #[tokio::test]
    async fn test_fallback_returns_original_on_failure() {
        let out = translate_or_original(&BrokenTranslator, "unchanged text", "en", "ko").await;
        assert_eq!(out, "unchanged text");
    }

    #[tokio::test]
    async fn test_fallback_skips_empty_input() {
        let out = translate_or_original(&BrokenTranslator, "", "en", "ko").await;
        assert_eq!(out, "");
    }
}

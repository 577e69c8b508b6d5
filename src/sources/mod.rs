//! Clients for the two news providers feeding the digest.
//!
//! # Providers
//!
//! | Provider | Module | Language | Date filtering |
//! |----------|--------|----------|----------------|
//! | NewsAPI `everything` | [`newsapi`] | English | Server-side, previous KST day |
//! | Naver news search | [`naver`] | Korean | None; client over-fetches, normalizer filters to today |
//!
//! # Common Patterns
//!
//! Each client owns its `reqwest::Client` and base endpoint (overridable
//! for tests) and exposes a single `fetch(keyword)` returning the raw,
//! unnormalized provider items. Fetches return a typed [`SourceError`] so
//! the caller can tell "no news" from "provider down"; the aggregator is
//! the one place those errors collapse into empty article lists, keeping a
//! dead provider from aborting the digest.
//!
//! Neither client retries, paginates, or rate-limits: one request per
//! keyword per run.

pub mod naver;
pub mod newsapi;

use thiserror::Error;

/// Why a provider call produced no usable payload.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (connection, TLS, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("{provider} returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },
}

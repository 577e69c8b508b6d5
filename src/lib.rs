//! # News Dashboard
//!
//! A daily bilingual news digest: for a fixed set of technology keywords,
//! English coverage is pulled from NewsAPI and Korean coverage from the
//! Naver news search API, normalized into one shape, translated where
//! needed, and rendered into a single HTML report that goes out by email.
//!
//! ## Architecture
//!
//! The pipeline runs strictly sequentially, one keyword at a time:
//!
//! 1. **Fetch**: each provider client returns raw items for the keyword
//!    ([`sources`])
//! 2. **Normalize**: provider schemas, markup, and timestamp formats are
//!    collapsed into [`models::Article`], with day-window filtering
//!    ([`normalize`])
//! 3. **Translate**: English titles and summaries become Korean, with
//!    pass-through on failure ([`translate`])
//! 4. **Assemble**: each provider contributes at most five articles,
//!    shuffled once per section ([`aggregate`])
//! 5. **Render**: the whole digest becomes one escaped HTML document
//!    ([`render`])
//! 6. **Deliver**: the document is emailed over SMTP ([`mailer`])
//!
//! Every data-fetch and translation problem degrades gracefully; only
//! delivery failure aborts a run.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod mailer;
pub mod models;
pub mod normalize;
pub mod render;
pub mod sources;
pub mod translate;
pub mod util;

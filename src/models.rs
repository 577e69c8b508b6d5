//! Data models for articles as they move through the digest pipeline.
//!
//! This module defines the core data structures used throughout the application:
//! - [`KeywordPair`]: One configured keyword in both languages
//! - [`NewsApiItem`] / [`NaverItem`]: Raw provider payloads, straight off the wire
//! - [`Article`]: The normalized, provider-agnostic record
//! - [`Section`] / [`Digest`]: Per-keyword batches and the assembled report
//!
//! Raw items are one-way inputs: each is normalized into an [`Article`] once
//! and then discarded. Articles hold plain text only; HTML escaping is the
//! renderer's job, so translated and untranslated text go through a single
//! escaping point.

use serde::Deserialize;

/// A keyword tracked by the digest, in its English and Korean forms.
///
/// Pairs come from the configuration file; their order there is the order
/// of the sections in the rendered report. Both forms must be non-empty,
/// which [`crate::config::DigestConfig::load`] enforces.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordPair {
    /// English search term, sent to NewsAPI.
    pub foreign: String,
    /// Korean search term, sent to Naver.
    pub local: String,
}

/// Which provider an article originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    /// English-language coverage from NewsAPI.
    Foreign,
    /// Korean-language coverage from Naver.
    Local,
}

/// One article as returned by NewsAPI's `everything` endpoint.
///
/// NewsAPI nulls out fields on removed articles, so everything is optional
/// here; normalization turns missing fields into empty strings.
#[derive(Debug, Deserialize)]
pub struct NewsApiItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// ISO-8601 publication timestamp, usually with a trailing `Z`.
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
}

/// Response envelope for NewsAPI's `everything` endpoint.
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<NewsApiItem>,
}

/// One item as returned by the Naver news search API.
///
/// Title and description arrive with `<b>` emphasis injected around the
/// matched query and quotes escaped as `&quot;`; the normalizer strips both.
#[derive(Debug, Deserialize)]
pub struct NaverItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// URL of the publisher's own page (as opposed to `link`, which points
    /// at Naver's mirror).
    #[serde(default)]
    pub originallink: String,
    /// RFC-822-style timestamp with a fixed `+0900` offset suffix.
    #[serde(rename = "pubDate", default)]
    pub pub_date: String,
}

/// Response envelope for the Naver news search API.
#[derive(Debug, Deserialize)]
pub struct NaverResponse {
    #[serde(default)]
    pub items: Vec<NaverItem>,
}

/// A normalized article, ready for assembly and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Plain-text headline (translated to Korean for foreign articles).
    pub title: String,
    /// Plain-text summary (translated to Korean for foreign articles).
    pub description: String,
    /// Link to the article on the publisher's site.
    pub url: String,
    /// `YYYY-MM-DD HH:MM` when the provider timestamp parsed; for foreign
    /// articles that failed to parse, the provider's raw string verbatim.
    pub published_at: String,
    /// Provider the article came from.
    pub source_language: SourceLanguage,
}

/// The batch of articles rendered for one keyword pair.
///
/// Holds at most five articles per provider, already shuffled; the order
/// is frozen once the section is built.
#[derive(Debug)]
pub struct Section {
    pub pair: KeywordPair,
    pub articles: Vec<Article>,
}

/// The complete report for one run: one section per configured keyword,
/// in configuration order. Fully assembled before any rendering happens.
#[derive(Debug, Default)]
pub struct Digest {
    pub sections: Vec<Section>,
}

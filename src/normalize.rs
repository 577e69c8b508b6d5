//! Normalization of raw provider items into [`Article`] records.
//!
//! The two providers disagree on schema, timestamp format, and markup, and
//! this module is where those differences end. Two policies apply, one per
//! provider:
//!
//! - **NewsAPI (foreign)**: every item survives. An unparseable timestamp
//!   keeps the provider's raw string instead of dropping the article;
//!   content outranks a cosmetic formatting issue.
//! - **Naver (local)**: items are the date filter. The server can't filter
//!   by day, so anything not published on the reference day (including
//!   items whose timestamp fails to parse) is dropped here, before an
//!   [`Article`] ever exists. Unknown date is treated as not-today.
//!
//! Output text is plain but *not* HTML-escaped; escaping happens once, in
//! the renderer, so translated and raw text take the same path.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{Article, NaverItem, NewsApiItem, SourceLanguage};

/// Timestamp format shown in the rendered digest.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format Naver's `pubDate` carries, after the offset suffix is dropped.
const NAVER_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Number of bytes in the offset suffix Naver appends (`" +0900"`).
const NAVER_OFFSET_SUFFIX_LEN: usize = 6;

/// Normalize a NewsAPI item. Never drops the item.
pub fn normalize_foreign(item: NewsApiItem) -> Article {
    let published_at = match item.published_at {
        Some(raw) => format_iso_timestamp(&raw),
        None => String::new(),
    };
    Article {
        title: item.title.unwrap_or_default(),
        description: item.description.unwrap_or_default(),
        url: item.url.unwrap_or_default(),
        published_at,
        source_language: SourceLanguage::Foreign,
    }
}

/// Normalize a Naver item, keeping it only when published on `today`.
///
/// Strips the provider's injected `<b>` emphasis and `&quot;` entities
/// from title and description. Returns `None` for items outside the day
/// window or with an unparseable `pubDate`.
pub fn normalize_local(item: NaverItem, today: NaiveDate) -> Option<Article> {
    let published = parse_naver_date(&item.pub_date)?;
    if published.date() != today {
        return None;
    }
    Some(Article {
        title: strip_markup(&item.title),
        description: strip_markup(&item.description),
        url: item.originallink,
        published_at: published.format(DISPLAY_FORMAT).to_string(),
        source_language: SourceLanguage::Local,
    })
}

/// Reformat an ISO-8601 timestamp (trailing `Z` accepted) for display.
/// On parse failure the raw string comes back verbatim.
fn format_iso_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Parse Naver's RFC-822-style `pubDate`, ignoring the trailing offset.
///
/// The offset is a fixed `+0900` suffix, so the last six bytes are dropped
/// and the rest parsed as a naive KST timestamp.
fn parse_naver_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.get(..raw.len().checked_sub(NAVER_OFFSET_SUFFIX_LEN)?)?;
    NaiveDateTime::parse_from_str(trimmed, NAVER_DATE_FORMAT).ok()
}

/// Remove Naver's search-hit emphasis and unescape quote entities.
fn strip_markup(text: &str) -> String {
    text.replace("<b>", "")
        .replace("</b>", "")
        .replace("&quot;", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn naver_item(pub_date: &str) -> NaverItem {
        NaverItem {
            title: "제목".to_string(),
            description: "요약".to_string(),
            originallink: "https://news.example.co.kr/1".to_string(),
            pub_date: pub_date.to_string(),
        }
    }

    #[test]
    fn test_foreign_timestamp_reformatted() {
        let article = normalize_foreign(NewsApiItem {
            title: Some("Title".to_string()),
            description: Some("Desc".to_string()),
            url: Some("https://e.com/a".to_string()),
            published_at: Some("2026-08-05T14:22:09Z".to_string()),
        });
        assert_eq!(article.published_at, "2026-08-05 14:22");
        assert_eq!(article.source_language, SourceLanguage::Foreign);
    }

    #[test]
    fn test_foreign_unparseable_timestamp_kept_verbatim() {
        let article = normalize_foreign(NewsApiItem {
            title: Some("Title".to_string()),
            description: None,
            url: None,
            published_at: Some("yesterday-ish".to_string()),
        });
        // The item survives with the raw string; nothing is dropped.
        assert_eq!(article.published_at, "yesterday-ish");
        assert_eq!(article.description, "");
        assert_eq!(article.url, "");
    }

    #[test]
    fn test_foreign_missing_timestamp_is_empty() {
        let article = normalize_foreign(NewsApiItem {
            title: None,
            description: None,
            url: None,
            published_at: None,
        });
        assert_eq!(article.published_at, "");
    }

    #[test]
    fn test_local_item_published_today_survives() {
        let article =
            normalize_local(naver_item("Thu, 06 Aug 2026 09:12:00 +0900"), today()).unwrap();
        assert_eq!(article.published_at, "2026-08-06 09:12");
        assert_eq!(article.source_language, SourceLanguage::Local);
        assert_eq!(article.url, "https://news.example.co.kr/1");
    }

    #[test]
    fn test_local_item_published_yesterday_dropped() {
        assert!(normalize_local(naver_item("Wed, 05 Aug 2026 23:59:00 +0900"), today()).is_none());
    }

    #[test]
    fn test_local_item_unparseable_date_dropped() {
        assert!(normalize_local(naver_item("not a date at all"), today()).is_none());
        assert!(normalize_local(naver_item(""), today()).is_none());
        assert!(normalize_local(naver_item("+0900"), today()).is_none());
    }

    #[test]
    fn test_local_markup_and_entities_stripped() {
        let item = NaverItem {
            title: "<b>온디바이스 AI</b> &quot;보안&quot; 발표".to_string(),
            description: "새 <b>칩셋</b>".to_string(),
            originallink: "https://news.example.co.kr/2".to_string(),
            pub_date: "Thu, 06 Aug 2026 10:00:00 +0900".to_string(),
        };
        let article = normalize_local(item, today()).unwrap();
        // Plain unescaped text: entities resolved, markup gone, and no
        // HTML escaping applied at this stage.
        assert_eq!(article.title, "온디바이스 AI \"보안\" 발표");
        assert_eq!(article.description, "새 칩셋");
    }

    #[test]
    fn test_local_weekday_mismatch_dropped() {
        // 2026-08-06 is a Thursday; a lying weekday fails the parse and
        // the item is treated as not-today.
        assert!(normalize_local(naver_item("Mon, 06 Aug 2026 09:12:00 +0900"), today()).is_none());
    }
}

//! HTML rendering of an assembled [`Digest`].
//!
//! Pure string assembly, no I/O: a fixed digest renders to a byte-for-byte
//! identical document every time. The layout is the classic dashboard
//! email (one styled card per keyword with a five-column table), with
//! all styling inline, since mail clients ignore stylesheets.
//!
//! This module is the single point where article text becomes HTML. Every
//! article-derived string (title, description, timestamp, link) passes
//! through [`html_escape`] immediately before emission, regardless of
//! which provider it came from or whether it was translated. Upstream
//! stages keep text plain precisely so nothing is double-escaped here.

use std::fmt::Write;

use crate::models::{Digest, Section};

const SECTION_STYLE: &str = "background-color:#ffffff; padding:15px; margin-bottom:30px; \
     border-radius:8px; box-shadow: 0 2px 6px rgba(0,0,0,0.1);";

const TABLE_STYLE: &str = "width:100%; border-collapse: collapse;";

const TH_STYLE: &str = "background-color:#2980b9; color:#fff; padding:10px; text-align:left; \
     font-size:16px;border-bottom: 2px solid #1c5980;";

const TD_STYLE: &str = "border-bottom:1px solid #ddd; padding:10px; vertical-align:top;";

/// Render the digest to a complete standalone HTML document.
///
/// Sections appear in digest order; an empty section still gets its header
/// and an (empty) table rather than being skipped.
pub fn render(digest: &Digest) -> String {
    let mut html = String::new();
    html.push_str(
        "<html>\n<head>\n  <meta charset=\"UTF-8\">\n  <title>뉴스 대시보드</title>\n</head>\n\
         <body style=\"font-family: Arial, sans-serif; background-color:#f7f7f7; margin:0; padding:20px;\">\n\
         <h2 style=\"color:#2c3e50; border-bottom:2px solid #2980b9; padding-bottom:10px;\">뉴스 대시보드</h2>\n",
    );
    for section in &digest.sections {
        render_section(&mut html, section);
    }
    html.push_str("</body>\n</html>\n");
    html
}

fn render_section(out: &mut String, section: &Section) {
    let _ = write!(out, "<div style=\"{SECTION_STYLE}\">");
    let _ = write!(
        out,
        "<h3 style=\"color:#2980b9;\">{} (영어: {})</h3>",
        html_escape(&section.pair.local),
        html_escape(&section.pair.foreign)
    );

    let _ = write!(out, "<table style=\"{TABLE_STYLE}\">");
    let _ = write!(
        out,
        "<tr>\
         <th style='{TH_STYLE}'>번호</th>\
         <th style='{TH_STYLE}'>제목</th>\
         <th style='{TH_STYLE}'>요약</th>\
         <th style='{TH_STYLE}'>배포일</th>\
         <th style='{TH_STYLE}'>링크</th>\
         </tr>"
    );

    for (index, article) in section.articles.iter().enumerate() {
        let _ = write!(
            out,
            "<tr>\
             <td style='{TD_STYLE}'>{number}</td>\
             <td style='{TD_STYLE}'>{title}</td>\
             <td style='{TD_STYLE}'>{description}</td>\
             <td style='{TD_STYLE}'>{published_at}</td>\
             <td style='{TD_STYLE}'><a href='{url}' target='_blank' \
             style='color:#2980b9; text-decoration:none;'>링크</a></td>\
             </tr>",
            number = index + 1,
            title = html_escape(&article.title),
            description = html_escape(&article.description),
            published_at = html_escape(&article.published_at),
            url = html_escape(&article.url),
        );
    }
    out.push_str("</table></div>");
}

/// Escape text for embedding in HTML content or quoted attributes.
///
/// Single quotes are included because links are emitted inside
/// single-quoted `href` attributes.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

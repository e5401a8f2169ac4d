//! Session Page Parser
//!
//! セッションページからトーク一覧を抽出する。各 `<dt>` が1件のトーク

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::links::resolve_href;
use super::program_page::collapsed_text;
use crate::domain::entities::session::{Session, Talk};

pub const UNKNOWN_TITLE: &str = "Unknown Title";

static TALK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("dt").expect("valid talk selector"));
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("strong").expect("valid title selector"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid link selector"));

/// 直後の兄弟要素が `<dd>` ならその本文（発表者）
fn speaker_of(talk: &ElementRef) -> Option<String> {
    let next = talk.next_siblings().find_map(ElementRef::wrap)?;
    if next.value().name() != "dd" {
        return None;
    }
    Some(collapsed_text(&next)).filter(|s| !s.is_empty())
}

/// セッションページを解析する
///
/// # Arguments
///
/// * `html` - セッションページのHTML
/// * `session_url` - 相対リンク解決の基準URL
///
/// # Returns
///
/// ページ上の出現順のトーク
pub fn parse_session_page(html: &str, session_url: &str) -> Vec<Talk> {
    let document = Html::parse_document(html);

    document
        .select(&TALK_SELECTOR)
        .map(|dt| {
            let title = dt
                .select(&TITLE_SELECTOR)
                .next()
                .map(|strong| collapsed_text(&strong))
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
            let url = dt
                .select(&LINK_SELECTOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|href| resolve_href(session_url, href))
                .unwrap_or_else(|| Session::NO_LINK.to_string());

            Talk {
                title,
                url,
                speaker: speaker_of(&dt),
            }
        })
        .collect()
}

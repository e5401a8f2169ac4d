//! Link Resolution
//!
//! hrefの解決。絶対URLは一切変更せずそのまま返す

use url::Url;

/// `href` をページURL基準で解決する
///
/// 絶対URLならそのまま、相対URLなら `base` と結合する。
/// `base` が解釈できない場合も `href` をそのまま返す
pub fn resolve_href(base: &str, href: &str) -> String {
    let href = href.trim();
    if Url::parse(href).is_ok() {
        return href.to_string();
    }

    match Url::parse(base).and_then(|base| base.join(href)) {
        Ok(joined) => joined.to_string(),
        Err(_) => href.to_string(),
    }
}

//! # Conference Year Service
//!
//! 出力ファイル名に使う開催年の決定

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("valid year regex"));
static CONFCODE_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)CONFCODE=[A-Z]*(\d{2})\b").expect("valid confcode regex"));

/// 開催年を決定する
///
/// 見出し中の4桁の年 → URLの `CONFCODE=SODA25` の末尾2桁 → `fallback_year` の順に試す
pub fn resolve_conference_year(heading: &str, source_url: &str, fallback_year: i32) -> i32 {
    if let Some(m) = HEADING_YEAR_RE.find(heading) {
        if let Ok(year) = m.as_str().parse() {
            return year;
        }
    }

    if let Some(caps) = CONFCODE_YEAR_RE.captures(source_url) {
        if let Ok(short) = caps[1].parse::<i32>() {
            return 2000 + short;
        }
    }

    fallback_year
}

/// `conference_program_<year>.html`
pub fn output_file_name(year: i32) -> String {
    format!("conference_program_{}.html", year)
}

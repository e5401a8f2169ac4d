//! # Session Filter Service
//!
//! トークを含むセッションの判定とタイトル整形

use once_cell::sync::Lazy;
use regex::Regex;

static CONTRIBUTED_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CP\d+\s+").expect("valid CP prefix regex"));

/// 既定のトークセッション判定キーワード
pub const DEFAULT_TALK_KEYWORDS: &[&str] = &[
    "Session", "IP", "CP", "SODA", "ALENEX", "SOSA", "Workshop", "Lecture",
];

/// セッションフィルタ
///
/// 休憩や受付などトークを持たない枠をプログラムから除外する
#[derive(Debug, Clone)]
pub struct SessionFilter {
    keywords: Vec<String>,
}

impl SessionFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        let keywords = keywords.into_iter().map(|k| k.to_lowercase()).collect();
        Self { keywords }
    }

    /// タイトルがいずれかのキーワードを含むか（大文字小文字を区別しない）
    pub fn is_talk_session(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.keywords.iter().any(|k| title.contains(k.as_str()))
    }

    /// 先頭の `CP1 ` などの番号を取り除く
    pub fn clean_title(title: &str) -> String {
        CONTRIBUTED_PREFIX_RE.replace(title, "").trim().to_string()
    }
}

impl Default for SessionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_TALK_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}

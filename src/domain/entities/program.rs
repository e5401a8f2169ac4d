//! # ConferenceProgram Entity
//!
//! 会議プログラム全体（見出し・取得元URL・セッション一覧）

use super::session::Session;

/// 見出しが見つからない場合の既定値
pub const DEFAULT_HEADING: &str = "Conference Program";

/// 会議プログラム
///
/// 1回の実行で一度だけ生成され、レンダリング後に破棄される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceProgram {
    /// ページ見出し（例: "2025 ACM-SIAM Symposium on Discrete Algorithms"）
    pub heading: String,
    /// プログラムページのURL
    pub source_url: String,
    /// ソース順のセッション
    pub sessions: Vec<Session>,
}

impl ConferenceProgram {
    pub fn new(heading: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            source_url: source_url.into(),
            sessions: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

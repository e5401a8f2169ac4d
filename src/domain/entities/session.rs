//! # Session Entity
//!
//! セッションとトークのドメインエンティティ

use once_cell::sync::Lazy;
use regex::Regex;

static TIME_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2}:\d{2}\s?(?:AM|PM))\s*[-–—]\s*(\d{1,2}:\d{2}\s?(?:AM|PM))")
        .expect("valid time range regex")
});
static SINGLE_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d{1,2}:\d{2}\s?(?:AM|PM)").expect("valid time regex"));

/// 時間帯
///
/// 表示専用。開始時刻と（あれば）終了時刻のテキストをそのまま保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: String,
    pub end: Option<String>,
}

impl TimeSlot {
    pub fn new(start: impl Into<String>, end: Option<String>) -> Self {
        Self {
            start: start.into(),
            end,
        }
    }

    /// テキストから時間帯を抽出する
    ///
    /// `9:00 AM - 11:05 AM` のような範囲を優先し、なければ単独の時刻を探す。
    /// どちらも見つからない場合は `None`
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(caps) = TIME_RANGE_RE.captures(text) {
            return Some(Self::new(&caps[1], Some(caps[2].to_string())));
        }
        SINGLE_TIME_RE
            .find(text)
            .map(|m| Self::new(m.as_str(), None))
    }

    /// 表示用ラベル
    pub fn label(&self) -> String {
        match &self.end {
            Some(end) => format!("{} - {}", self.start, end),
            None => self.start.clone(),
        }
    }
}

/// トーク
///
/// セッション内の個々の発表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub title: String,
    /// 公式トークページのURL
    pub url: String,
    pub speaker: Option<String>,
}

impl Talk {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }
}

/// セッション
///
/// 部屋・時間帯・公式ページを持つトークのまとまり。
/// `talks` はソースページ上の出現順を保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub title: String,
    /// 所属する日の見出し（例: "Monday, January 13"）
    pub day: Option<String>,
    pub time_slot: Option<TimeSlot>,
    pub room: String,
    /// 公式セッションページのURL（リンクがない場合は `#`）
    pub url: String,
    pub talks: Vec<Talk>,
}

impl Session {
    /// リンク先を持たないセッションのURL
    pub const NO_LINK: &'static str = "#";

    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            day: None,
            time_slot: None,
            room: String::new(),
            url: url.into(),
            talks: Vec::new(),
        }
    }

    /// 開始時刻（時間帯がない場合は空文字列）
    pub fn start_time(&self) -> &str {
        self.time_slot
            .as_ref()
            .map(|slot| slot.start.as_str())
            .unwrap_or("")
    }
}

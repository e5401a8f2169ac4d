//! # Schedule Repository Trait
//!
//! 会議スケジュールページの取得と抽出を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::program::ConferenceProgram;
use crate::domain::entities::session::Talk;

/// スケジュールリポジトリ
///
/// プログラムページと各セッションページを読み、エンティティに変換する
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// プログラムページを取得してセッション一覧を抽出する
    ///
    /// # Arguments
    ///
    /// * `url` - プログラムページのURL
    ///
    /// # Returns
    ///
    /// トークを含まないセッション一覧を持つプログラム。
    /// 想定した構造がない場合は空のプログラム
    ///
    /// # Errors
    ///
    /// 通信またはHTTPステータスのエラー
    async fn fetch_program(&self, url: &str) -> Result<ConferenceProgram>;

    /// セッションページを取得してトーク一覧を抽出する
    ///
    /// # Arguments
    ///
    /// * `session_url` - 公式セッションページのURL
    ///
    /// # Returns
    ///
    /// ページ上の出現順のトーク
    async fn fetch_talks(&self, session_url: &str) -> Result<Vec<Talk>>;
}

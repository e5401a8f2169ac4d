//! # Extract Program Use Case
//!
//! プログラムページ抽出ユースケース

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::entities::program::ConferenceProgram;
use crate::domain::repositories::schedule_repository::ScheduleRepository;

/// プログラムページ抽出ユースケース
///
/// プログラムページの取得失敗は致命的。構造の不一致は空の結果になるだけ
pub struct ExtractProgramUseCase<R: ScheduleRepository> {
    schedule_repository: Arc<R>,
}

impl<R: ScheduleRepository> ExtractProgramUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `schedule_repository` - スケジュールリポジトリ
    pub fn new(schedule_repository: Arc<R>) -> Self {
        Self {
            schedule_repository,
        }
    }

    /// プログラムを抽出する
    ///
    /// # Arguments
    ///
    /// * `url` - プログラムページのURL
    ///
    /// # Errors
    ///
    /// プログラムページの取得に失敗した場合にエラーを返す
    pub async fn execute(&self, url: &str) -> Result<ConferenceProgram> {
        info!("Fetching main conference page: {}", url);
        let program = self.schedule_repository.fetch_program(url).await?;

        if program.is_empty() {
            warn!("No sessions were parsed. The page may not follow the SIAM program template.");
        }

        Ok(program)
    }
}

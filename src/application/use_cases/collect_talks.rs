//! # Collect Talks Use Case
//!
//! トーク収集ユースケース

use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::application::dto::talk_fetch_config::TalkFetchConfig;
use crate::domain::entities::program::ConferenceProgram;
use crate::domain::entities::session::Talk;
use crate::domain::repositories::schedule_repository::ScheduleRepository;

/// トーク収集結果のサマリー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// 取得に成功したセッションページの数
    pub fetched_sessions: usize,
    /// 取得に失敗したセッションページの数
    pub failed_sessions: usize,
    /// 取得対象外だったセッションの数
    pub skipped_sessions: usize,
    /// 収集したトークの総数
    pub talk_count: usize,
}

/// トーク収集ユースケース
///
/// 各セッションページを並行して取得し、結果をソース順に戻す。
/// 個々のページの失敗は警告にとどめ、そのセッションはトークなしで残す
pub struct CollectTalksUseCase<R: ScheduleRepository + 'static> {
    schedule_repository: Arc<R>,
}

impl<R: ScheduleRepository + 'static> CollectTalksUseCase<R> {
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

    /// トークを収集してプログラムに埋める
    ///
    /// # Arguments
    ///
    /// * `program` - トークが空のプログラム
    /// * `config` - トーク収集設定
    ///
    /// # Returns
    ///
    /// セッションごとのトークを埋めたプログラムと収集サマリー
    pub async fn execute(
        &self,
        mut program: ConferenceProgram,
        config: &TalkFetchConfig,
    ) -> Result<(ConferenceProgram, CollectSummary)> {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_requests));
        let mut summary = CollectSummary::default();

        let handles: Vec<Option<JoinHandle<Result<Vec<Talk>>>>> = program
            .sessions
            .iter()
            .map(|session| {
                if !config.should_fetch(&session.url) {
                    return None;
                }
                let repo = self.schedule_repository.clone();
                let semaphore = semaphore.clone();
                let url = session.url.clone();
                Some(tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await?;
                    repo.fetch_talks(&url).await
                }))
            })
            .collect();

        for (session, handle) in program.sessions.iter_mut().zip(handles) {
            let Some(handle) = handle else {
                summary.skipped_sessions += 1;
                continue;
            };

            let result = handle
                .await
                .map_err(|e| anyhow::anyhow!("Failed to join talk fetch task: {}", e))
                .and_then(|r| r);

            match result {
                Ok(talks) => {
                    debug!("Fetched {} talks for session: {}", talks.len(), session.title);
                    summary.fetched_sessions += 1;
                    summary.talk_count += talks.len();
                    session.talks = talks;
                }
                Err(e) => {
                    warn!("Failed to fetch talks for '{}': {:#}", session.title, e);
                    summary.failed_sessions += 1;
                }
            }
        }

        info!(
            "Fetched {} session pages ({} failed, {} skipped), {} talks",
            summary.fetched_sessions,
            summary.failed_sessions,
            summary.skipped_sessions,
            summary.talk_count
        );

        Ok((program, summary))
    }
}

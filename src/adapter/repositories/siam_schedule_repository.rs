//! SIAM Schedule Repository Implementation
//!
//! ScheduleRepositoryのSIAM実装（HTTPで取得したページをパーサーに渡す）

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::http::client::PageFetcher;
use crate::adapter::siam::program_page::parse_program_page;
use crate::adapter::siam::session_page::parse_session_page;
use crate::domain::entities::program::ConferenceProgram;
use crate::domain::entities::session::Talk;
use crate::domain::repositories::schedule_repository::ScheduleRepository;
use crate::domain::services::session_filter::SessionFilter;

/// SIAM会議ページのリポジトリ
pub struct SiamScheduleRepository<F: PageFetcher> {
    fetcher: Arc<F>,
    filter: SessionFilter,
}

impl<F: PageFetcher> SiamScheduleRepository<F> {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `fetcher` - ページ取得クライアント
    /// * `filter` - トークセッションの判定
    pub fn new(fetcher: Arc<F>, filter: SessionFilter) -> Self {
        Self { fetcher, filter }
    }
}

#[async_trait]
impl<F: PageFetcher> ScheduleRepository for SiamScheduleRepository<F> {
    async fn fetch_program(&self, url: &str) -> Result<ConferenceProgram> {
        // プログラムページは1回だけ取得し、失敗したら実行を中断する
        let html = self
            .fetcher
            .fetch(url)
            .await
            .context("Failed to fetch the main page")?;

        Ok(parse_program_page(&html, url, &self.filter))
    }

    async fn fetch_talks(&self, session_url: &str) -> Result<Vec<Talk>> {
        let html = self
            .fetcher
            .fetch_with_retry(session_url)
            .await
            .context("Failed to fetch session page")?;

        Ok(parse_session_page(&html, session_url))
    }
}

//! HTML Program Repository Implementation
//!
//! ProgramRepositoryのHTML実装（描画したプログラムをファイルに書き出す）

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapter::html::renderer::render_program;
use crate::domain::entities::program::ConferenceProgram;
use crate::domain::repositories::program_repository::ProgramRepository;

/// HTMLファイルベースのプログラムリポジトリ
pub struct HtmlProgramRepository {
    output_dir: PathBuf,
}

impl HtmlProgramRepository {
    /// 新しいリポジトリを作成
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// ファイルに書き出す（同期処理）
    fn write_sync(path: &Path, html: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create output directory")?;
        }

        fs::write(path, html)
            .with_context(|| format!("Failed to write HTML output to {}", path.display()))?;

        info!("HTML output successfully saved to {}", path.display());
        Ok(())
    }
}

#[async_trait]
impl ProgramRepository for HtmlProgramRepository {
    async fn save(
        &self,
        file_name: &str,
        program: &ConferenceProgram,
        generated_on: NaiveDate,
    ) -> Result<PathBuf> {
        let html = render_program(program, generated_on);
        let path = self.output_dir.join(file_name);

        let target = path.clone();
        tokio::task::spawn_blocking(move || Self::write_sync(&target, &html))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(path)
    }
}

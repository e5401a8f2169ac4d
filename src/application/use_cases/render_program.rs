//! # Render Program Use Case
//!
//! プログラム出力ユースケース

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::program::ConferenceProgram;
use crate::domain::repositories::program_repository::ProgramRepository;
use crate::domain::services::conference_year::{output_file_name, resolve_conference_year};

/// 出力結果のサマリー
#[derive(Debug, Clone)]
pub struct RenderSummary {
    /// 開催年
    pub year: i32,
    /// 書き込んだファイルのパス
    pub path: PathBuf,
}

/// プログラム出力ユースケース
///
/// 開催年からファイル名を決め、プログラムを保存する
pub struct RenderProgramUseCase<P: ProgramRepository> {
    program_repository: Arc<P>,
}

impl<P: ProgramRepository> RenderProgramUseCase<P> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `program_repository` - プログラムリポジトリ
    pub fn new(program_repository: Arc<P>) -> Self {
        Self { program_repository }
    }

    /// 出力ファイル名を決める
    pub fn file_name_for(program: &ConferenceProgram, generated_on: NaiveDate) -> (i32, String) {
        let year =
            resolve_conference_year(&program.heading, &program.source_url, generated_on.year());
        (year, output_file_name(year))
    }

    /// プログラムを保存する
    ///
    /// # Arguments
    ///
    /// * `program` - 保存するプログラム
    /// * `generated_on` - 生成日
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        program: &ConferenceProgram,
        generated_on: NaiveDate,
    ) -> Result<RenderSummary> {
        let (year, file_name) = Self::file_name_for(program, generated_on);
        let path = self
            .program_repository
            .save(&file_name, program, generated_on)
            .await?;

        Ok(RenderSummary { year, path })
    }
}

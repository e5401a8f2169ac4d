//! # Program Repository Trait
//!
//! 描画済みプログラムの保存を抽象化

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::domain::entities::program::ConferenceProgram;

/// プログラムリポジトリ
///
/// プログラムを出力形式に変換して保存する
#[async_trait]
pub trait ProgramRepository: Send + Sync {
    /// プログラムを保存する
    ///
    /// # Arguments
    ///
    /// * `file_name` - 出力ファイル名（例: `conference_program_2025.html`）
    /// * `program` - 保存するプログラム
    /// * `generated_on` - 生成日（出力に埋め込まれる）
    ///
    /// # Returns
    ///
    /// 書き込んだファイルのパス
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(
        &self,
        file_name: &str,
        program: &ConferenceProgram,
        generated_on: NaiveDate,
    ) -> Result<PathBuf>;
}

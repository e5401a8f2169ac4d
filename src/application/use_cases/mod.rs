//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ExtractProgramUseCase**: プログラムページの取得と抽出
//! - **CollectTalksUseCase**: 各セッションページからのトーク収集
//! - **RenderProgramUseCase**: HTMLの描画と保存

pub mod collect_talks;
pub mod extract_program;
pub mod render_program;

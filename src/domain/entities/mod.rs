//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Session / Talk / TimeSlot**: セッションとその発表
//! - **ConferenceProgram**: 会議プログラム全体

pub mod program;
pub mod session;

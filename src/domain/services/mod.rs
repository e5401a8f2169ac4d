//! # Domain Services
//!
//! エンティティに属さない純粋なビジネスルール
//!
//! ## サービス
//!
//! - **session_filter**: トークセッションの判定とタイトル整形
//! - **schedule_layout**: 日→時間帯の表レイアウト
//! - **conference_year**: 開催年と出力ファイル名の決定

pub mod conference_year;
pub mod schedule_layout;
pub mod session_filter;

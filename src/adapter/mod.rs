//! Adapter Layer
//!
//! 外部システム（SIAMの会議ページ, ファイルシステム）との統合

pub mod config;
pub mod html;
pub mod http;
pub mod repositories;
pub mod siam;

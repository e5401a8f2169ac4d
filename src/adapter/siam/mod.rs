//! SIAM Page Parsers
//!
//! SIAM会議スケジュールテンプレートの解析。ネットワークには触れない

pub mod links;
pub mod program_page;
pub mod session_page;

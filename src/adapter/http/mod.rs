//! HTTP Adapter Modules
//!
//! ページ取得のためのアダプターモジュール

pub mod client;
pub mod error;
pub mod retry;

#[cfg(test)]
pub(crate) mod test_server;

//! # siamprog
//!
//! SIAMの会議スケジュールページを取得し、セッションとトークの一覧を
//! 公式ページへのリンク付きの静的HTMLとして出力するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: セッション・トークのエンティティとレイアウト規則（外部I/Oなし）
//! - **Application層**: 抽出・トーク収集・出力のユースケース
//! - **Adapter層**: HTTP取得、SIAMページの解析、HTML描画、ファイル出力
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

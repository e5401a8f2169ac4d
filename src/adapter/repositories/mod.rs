//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod html_program_repository;
pub mod siam_schedule_repository;

//! siamprog - SIAM Conference Program Renderer
//!
//! SIAMの会議プログラムページを静的HTMLの一覧に変換する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use siamprog::adapter::config::Config;
use siamprog::driver::{Args, ProgramWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(args.config.as_deref())?;

    // Create workflow with injected dependencies
    let workflow = ProgramWorkflow::new(config)?;

    workflow.execute(&args).await?;
    Ok(())
}

//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// SIAMの会議プログラムページから静的HTMLの一覧を生成するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "siamprog")]
#[command(about = "Render a SIAM conference schedule page as a static HTML overview", long_about = None)]
pub struct Args {
    /// Schedule page URL, e.g. https://meetings.siam.org/program.cfm?CONFCODE=SODA25
    pub url: String,

    /// Dry run mode - parse and report, don't write the HTML file
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,
}

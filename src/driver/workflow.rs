//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::http::client::{PageFetcher, ReqwestPageFetcher};
use crate::adapter::repositories::html_program_repository::HtmlProgramRepository;
use crate::adapter::repositories::siam_schedule_repository::SiamScheduleRepository;
use crate::application::dto::talk_fetch_config::TalkFetchConfig;
use crate::application::use_cases::collect_talks::CollectTalksUseCase;
use crate::application::use_cases::extract_program::ExtractProgramUseCase;
use crate::application::use_cases::render_program::RenderProgramUseCase;
use crate::domain::services::schedule_layout::ProgramLayout;
use crate::domain::services::session_filter::SessionFilter;

use super::cli::Args;

/// Program Conversion Workflow
pub struct ProgramWorkflow<F: PageFetcher + 'static> {
    extract_use_case: ExtractProgramUseCase<SiamScheduleRepository<F>>,
    collect_use_case: CollectTalksUseCase<SiamScheduleRepository<F>>,
    render_use_case: RenderProgramUseCase<HtmlProgramRepository>,
    talk_fetch_config: TalkFetchConfig,
}

impl ProgramWorkflow<ReqwestPageFetcher> {
    /// Create a new workflow instance backed by the real HTTP client
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Arc::new(ReqwestPageFetcher::new(&config)?);
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: PageFetcher + 'static> ProgramWorkflow<F> {
    /// Create a new workflow instance with dependency injection
    pub fn with_fetcher(config: Config, fetcher: Arc<F>) -> Self {
        // Repository implementations
        let filter = SessionFilter::new(config.talk_session_keywords.clone());
        let schedule_repo = Arc::new(SiamScheduleRepository::new(fetcher, filter));
        let program_repo = Arc::new(HtmlProgramRepository::new(&config.output_dir));

        // Use Cases construction
        let extract_use_case = ExtractProgramUseCase::new(schedule_repo.clone());
        let collect_use_case = CollectTalksUseCase::new(schedule_repo);
        let render_use_case = RenderProgramUseCase::new(program_repo);

        let talk_fetch_config = TalkFetchConfig::new(
            config.session_url_prefix.clone(),
            config.max_concurrent_requests,
        );

        Self {
            extract_use_case,
            collect_use_case,
            render_use_case,
            talk_fetch_config,
        }
    }

    /// Execute the conversion workflow
    pub async fn execute(&self, args: &Args) -> Result<Option<PathBuf>> {
        self.execute_on(args, Local::now().date_naive()).await
    }

    /// Execute the conversion workflow with an explicit generation date
    ///
    /// Returns the written file, or `None` when nothing was written
    pub async fn execute_on(&self, args: &Args, generated_on: NaiveDate) -> Result<Option<PathBuf>> {
        info!("Starting conference program conversion...");
        info!("Dry run: {}", args.dry_run);

        // Program page (fatal on failure)
        let program = self.extract_use_case.execute(&args.url).await?;
        println!("✓ Fetched program: {}", program.heading);
        println!("✓ Parsed {} sessions", program.sessions.len());

        if program.is_empty() {
            error!("No sessions were parsed. Please check the page URL and HTML structure.");
            println!("No sessions to render. Exiting.");
            return Ok(None);
        }

        // Session pages
        let (program, summary) = self
            .collect_use_case
            .execute(program, &self.talk_fetch_config)
            .await?;
        println!(
            "✓ Fetched {} talks from {} session pages ({} failed)",
            summary.talk_count, summary.fetched_sessions, summary.failed_sessions
        );

        let layout = ProgramLayout::build(&program.sessions);
        info!(
            "Maximum concurrent sessions across all days: {}",
            layout.columns
        );

        if args.dry_run {
            let (_, file_name) = RenderProgramUseCase::<HtmlProgramRepository>::file_name_for(
                &program,
                generated_on,
            );
            println!(
                "✓ Dry-run mode (not writing {}): {} sessions in {} days",
                file_name,
                layout.session_count(),
                layout.days.len()
            );
            for day in &layout.days {
                println!("  {}", day.day);
                for slot in &day.slots {
                    for session in &slot.sessions {
                        println!(
                            "    - {} | {} | {} | {} talks",
                            slot.label,
                            session.title,
                            session.room,
                            session.talks.len()
                        );
                    }
                }
            }
            return Ok(None);
        }

        let rendered = self.render_use_case.execute(&program, generated_on).await?;
        info!("Conference year: {}", rendered.year);
        println!("✓ Wrote {}", rendered.path.display());

        Ok(Some(rendered.path))
    }
}

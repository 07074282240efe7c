use crate::selectors::BUTTON_SELECTOR;
use crate::tools::export::{Aggregator, ExportOutcome, SCHOOL_NAME_KEY};
use crate::tools::{performance, summary, types::Record};
use crate::{error::*, types::*};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error, info, warn};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Pause after a page load.
    pub navigate_settle_ms: u64,
    /// Pause after switching to the table view.
    pub table_settle_ms: u64,
    /// Pause after a school is done.
    pub school_cooldown_ms: u64,
    pub headless: bool,
    pub window_size: (u32, u32),
    /// Visible text of the control that switches to the table view.
    pub table_tab_text: String,
}
impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            navigate_settle_ms: 2_000,
            table_settle_ms: 2_000,
            school_cooldown_ms: 1_000,
            headless: false,
            window_size: (1366, 768),
            table_tab_text: "Table".into(),
        }
    }
}

impl EngineOptions {
    /// Same options with every settle pause set to zero.
    pub fn without_pauses(self) -> Self {
        Self {
            navigate_settle_ms: 0,
            table_settle_ms: 0,
            school_cooldown_ms: 0,
            ..self
        }
    }
}

/// Live page session: the only place that touches a rendered page.
#[async_trait]
pub trait Renderer: Send {
    fn name(&self) -> &'static str;

    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// HTML of the page as currently rendered.
    async fn snapshot(&mut self) -> Result<String>;

    /// Click the first `selector` match whose text contains `text`.
    /// Returns whether anything was clicked.
    async fn click_containing(&mut self, selector: &str, text: &str) -> Result<bool>;

    async fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Opens a rendering session.
#[async_trait]
pub trait Launcher: Send + Sync {
    fn name(&self) -> &'static str;

    async fn launch(&self, opts: &EngineOptions) -> Result<Box<dyn Renderer>>;
}

/// Persists the final table.
pub trait TableWriter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Where the rows end up, for reporting.
    fn target(&self) -> String;

    fn write_records(&self, header: &[String], records: &[Record]) -> Result<()>;
}

pub struct Engine<'a> {
    pub launcher: &'a dyn Launcher,
    pub writer: &'a dyn TableWriter,
    pub opts: EngineOptions,
}

impl<'a> Engine<'a> {
    pub fn new(launcher: &'a dyn Launcher, writer: &'a dyn TableWriter, opts: EngineOptions) -> Self {
        Self { launcher, writer, opts }
    }

    /// Scrape the whole roster and export whatever was collected.
    ///
    /// A school that fails is logged and left out. A session that fails to
    /// open is logged and the run goes straight to export. The session is
    /// always closed; only export failures are returned.
    pub async fn run(&self, roster: &Roster) -> Result<RunReport> {
        let started_at = Utc::now();
        let mut aggregator = Aggregator::new();
        let mut failed = Vec::new();
        let mut attempted = 0;

        info!("Starting scraper ({} schools, renderer {})", roster.len(), self.launcher.name());
        match self.launcher.launch(&self.opts).await {
            Ok(mut renderer) => {
                attempted = roster.len();
                failed = self
                    .scrape_roster(renderer.as_mut(), roster, &mut aggregator)
                    .await;
                if let Err(e) = renderer.close().await {
                    warn!("Failed to close {} session: {e}", renderer.name());
                }
            }
            Err(e) => error!("Error: {e}"),
        }

        let export = aggregator.export(self.writer)?;
        match &export {
            ExportOutcome::Nothing => info!("No schools were scraped"),
            ExportOutcome::Written { count, target } => {
                info!("Saved {count} schools to {target}")
            }
        }

        Ok(RunReport {
            started_at,
            finished_at: Utc::now(),
            attempted,
            scraped: aggregator.len(),
            failed,
            export,
        })
    }

    /// Visit every school in order. Returns the names of schools that failed.
    pub async fn scrape_roster(
        &self,
        renderer: &mut dyn Renderer,
        roster: &Roster,
        aggregator: &mut Aggregator,
    ) -> Vec<String> {
        let total = roster.len();
        let mut failed = Vec::new();

        for (position, entry) in roster.iter() {
            info!("Processing school {position}/{total}: {}", entry.school_name);
            match self.scrape_school(renderer, entry).await {
                Ok(record) => {
                    info!("Scraped: {}", entry.school_name);
                    aggregator.push(record);
                    renderer.pause(ms(self.opts.school_cooldown_ms)).await;
                }
                Err(e) => {
                    error!("Error with school {}: {e}", entry.school_name);
                    failed.push(entry.school_name.clone());
                }
            }
        }
        failed
    }

    /// Summary view, then table view, merged into one record.
    pub async fn scrape_school(
        &self,
        renderer: &mut dyn Renderer,
        entry: &RosterEntry,
    ) -> Result<Record> {
        renderer.navigate(&entry.url).await?;
        renderer.pause(ms(self.opts.navigate_settle_ms)).await;

        let mut record = summary::extract_summary(&renderer.snapshot().await?);
        record.set(SCHOOL_NAME_KEY, entry.school_name.as_str());

        info!("Clicking {} tab...", self.opts.table_tab_text);
        if !renderer
            .click_containing(BUTTON_SELECTOR, &self.opts.table_tab_text)
            .await?
        {
            debug!("No {} tab on {}", self.opts.table_tab_text, entry.url);
        }
        info!("Waiting for table content...");
        renderer.pause(ms(self.opts.table_settle_ms)).await;

        let academic = performance::parse_performance(&renderer.snapshot().await?);
        debug!("Academic data: {}", serde_json::to_string(&academic)?);

        record.merge(academic);
        debug!("Data: {}", serde_json::to_string(&record)?);
        Ok(record)
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

//! Offline renderer over saved page snapshots
//!
//! A snapshot directory holds `<stem>.html` for each school page and,
//! optionally, `<stem>.table.html` for the same page after switching to its
//! table view. The stem comes from [`snapshot_stem`].

use crate::engine::{EngineOptions, Launcher, Renderer};
use crate::error::*;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use url::Url;

/// File stem for `url`: host and path with every non-alphanumeric run
/// collapsed to `_`.
///
/// # Examples
/// ```
/// use schoolstats::services::replay::snapshot_stem;
///
/// let stem = snapshot_stem("https://www.example.org/school/bc/1234/maple-elementary").unwrap();
/// assert_eq!(stem, "www_example_org_school_bc_1234_maple_elementary");
/// ```
pub fn snapshot_stem(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| SchoolError::InvalidUrl(url.into()))?;
    let raw = format!("{}{}", parsed.host_str().unwrap_or_default(), parsed.path());
    let stem = raw
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if stem.is_empty() {
        return Err(SchoolError::InvalidUrl(url.into()));
    }
    Ok(stem)
}

pub struct ReplayLauncher {
    dir: PathBuf,
}

impl ReplayLauncher {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl Launcher for ReplayLauncher {
    fn name(&self) -> &'static str {
        "replay"
    }

    async fn launch(&self, _opts: &EngineOptions) -> Result<Box<dyn Renderer>> {
        if !self.dir.is_dir() {
            return Err(SchoolError::Other(format!(
                "snapshot directory not found: {}",
                self.dir.display()
            )));
        }
        Ok(Box::new(ReplayRenderer::new(&self.dir)))
    }
}

/// Serves snapshots in place of a live page.
pub struct ReplayRenderer {
    dir: PathBuf,
    url: String,
    current: Option<PathBuf>,
}

impl ReplayRenderer {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            url: String::new(),
            current: None,
        }
    }
}

#[async_trait]
impl Renderer for ReplayRenderer {
    fn name(&self) -> &'static str {
        "replay"
    }

    async fn navigate(&mut self, url: &str) -> Result<()> {
        let page = self.dir.join(format!("{}.html", snapshot_stem(url)?));
        if !page.is_file() {
            return Err(SchoolError::render_error(
                url,
                format!("no snapshot at {}", page.display()),
            ));
        }
        self.url = url.to_string();
        self.current = Some(page);
        Ok(())
    }

    async fn snapshot(&mut self) -> Result<String> {
        let Some(page) = &self.current else {
            return Err(SchoolError::render_error(&self.url, "no page loaded"));
        };
        Ok(std::fs::read_to_string(page)?)
    }

    /// Switches to the table snapshot when one exists; selector and text are
    /// not checked against the saved page.
    async fn click_containing(&mut self, _selector: &str, _text: &str) -> Result<bool> {
        if self.current.is_none() {
            return Err(SchoolError::render_error(&self.url, "no page loaded"));
        }
        let table = self
            .dir
            .join(format!("{}.table.html", snapshot_stem(&self.url)?));
        if table.is_file() {
            self.current = Some(table);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

//! Chrome-backed renderer
//!
//! `headless_chrome` is blocking, so every call runs on tokio's blocking pool
//! with its own handle on the tab.

use crate::engine::{EngineOptions, Launcher, Renderer};
use crate::error::*;
use async_trait::async_trait;
use headless_chrome::browser::tab::NoElementFound;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;

pub struct ChromeLauncher;

#[async_trait]
impl Launcher for ChromeLauncher {
    fn name(&self) -> &'static str {
        "headless-chrome"
    }

    async fn launch(&self, opts: &EngineOptions) -> Result<Box<dyn Renderer>> {
        let headless = opts.headless;
        let window_size = opts.window_size;
        let session = run_blocking("chrome://launch", move || {
            ChromeSession::open(headless, window_size)
        })
        .await?;
        Ok(Box::new(session))
    }
}

pub struct ChromeSession {
    browser: Option<Browser>,
    tab: Arc<Tab>,
    current_url: String,
}

impl ChromeSession {
    fn open(headless: bool, window_size: (u32, u32)) -> anyhow::Result<Self> {
        let mut args = Vec::new();
        if !headless {
            args.push(OsStr::new("--start-maximized"));
        }
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .window_size(Some(window_size))
            .args(args)
            .build()
            .map_err(|e| anyhow::anyhow!("chrome launch options: {e}"))?;
        let browser = Browser::new(options)?;
        let tab = browser.new_tab()?;
        Ok(Self {
            browser: Some(browser),
            tab,
            current_url: String::new(),
        })
    }
}

#[async_trait]
impl Renderer for ChromeSession {
    fn name(&self) -> &'static str {
        "headless-chrome"
    }

    async fn navigate(&mut self, url: &str) -> Result<()> {
        let tab = Arc::clone(&self.tab);
        let target = url.to_string();
        run_blocking(url, move || {
            tab.navigate_to(&target)?.wait_until_navigated()?;
            Ok(())
        })
        .await?;
        self.current_url = url.to_string();
        Ok(())
    }

    async fn snapshot(&mut self) -> Result<String> {
        let tab = Arc::clone(&self.tab);
        run_blocking(&self.current_url, move || tab.get_content()).await
    }

    async fn click_containing(&mut self, selector: &str, text: &str) -> Result<bool> {
        let tab = Arc::clone(&self.tab);
        let selector = selector.to_string();
        let text = text.to_string();
        run_blocking(&self.current_url, move || {
            for element in or_none_found(tab.find_elements(&selector))? {
                let label = element.get_inner_text().unwrap_or_default();
                if label.contains(&text) {
                    element.click()?;
                    return Ok(true);
                }
            }
            Ok(false)
        })
        .await
    }

    async fn close(&mut self) -> Result<()> {
        let Some(browser) = self.browser.take() else {
            return Ok(());
        };
        let tab = Arc::clone(&self.tab);
        run_blocking(&self.current_url, move || {
            tab.close(false)?;
            drop(browser);
            Ok(())
        })
        .await
    }
}

/// Run a blocking browser call off the async runtime.
async fn run_blocking<T, F>(url: &str, call: F) -> Result<T>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| SchoolError::render_error(url, e))?
        .map_err(|e| SchoolError::render_error(url, e))
}

/// An empty match list when the page has no element for the selector;
/// any other failure is passed through.
fn or_none_found<T>(found: anyhow::Result<Vec<T>>) -> anyhow::Result<Vec<T>> {
    match found {
        Err(e) if e.is::<NoElementFound>() => Ok(Vec::new()),
        other => other,
    }
}

use crate::config::{BrowserConfig, Config};
use crate::Result;
use eoka::{Browser, Page};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of one load-and-capture run.
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// URL that was loaded.
    pub url: String,
    /// Whether the page load completed.
    pub loaded: bool,
    /// Page-load latency in milliseconds. Absent when the load failed.
    pub load_ms: Option<u64>,
    /// Load error message if the load failed.
    pub error: Option<String>,
    /// Path the screenshot was written to.
    pub screenshot: String,
    /// Total wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Runs one load-measure-settle-capture cycle.
pub struct Runner {
    browser: Browser,
    page: Page,
}

impl Runner {
    /// Create a new runner with browser config.
    pub async fn new(config: &BrowserConfig) -> Result<Self> {
        let stealth = eoka::StealthConfig {
            headless: config.headless,
            proxy: config.proxy.clone(),
            user_agent: config.user_agent.clone(),
            viewport_width: config.viewport.as_ref().map(|v| v.width).unwrap_or(1280),
            viewport_height: config.viewport.as_ref().map(|v| v.height).unwrap_or(720),
            ..Default::default()
        };

        debug!(
            "Launching browser (headless: {}, proxy: {:?})",
            config.headless, config.proxy
        );
        let browser = Browser::launch_with_config(stealth).await?;
        let page = browser.new_page("about:blank").await?;

        Ok(Self { browser, page })
    }

    /// The user agent the page reports, after any configured override.
    pub async fn user_agent(&self) -> Result<String> {
        Ok(self.page.evaluate("navigator.userAgent").await?)
    }

    /// Load the target once, wait the settle delay, capture a screenshot.
    ///
    /// A failed load is reported in the result, not as an error: the settle
    /// delay and the capture still run, so the screenshot shows whatever the
    /// browser ended up displaying.
    pub async fn run(&mut self, config: &Config) -> Result<RunResult> {
        let start = Instant::now();

        info!("Loading: {}", config.target.url);
        let (loaded, load_ms, error) = match self.page.goto(&config.target.url).await {
            Ok(_) => {
                let ms = start.elapsed().as_millis() as u64;
                info!("Loaded {} in {}ms", config.target.url, ms);
                (true, Some(ms), None)
            }
            Err(e) => {
                warn!("Failed to load {}: {}", config.target.url, e);
                (false, None, Some(e.to_string()))
            }
        };

        debug!("Settling for {}ms before capture", config.capture.delay_ms);
        self.page.wait(config.capture.delay_ms).await;

        let data = self.page.screenshot().await?;
        std::fs::write(&config.capture.path, data)?;
        info!("Saved screenshot to: {}", config.capture.path);

        Ok(RunResult {
            url: config.target.url.clone(),
            loaded,
            load_ms,
            error,
            screenshot: config.capture.path.clone(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Close the browser.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}

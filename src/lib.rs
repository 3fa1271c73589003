//! # loadspeed
//!
//! Page-load benchmarking with a headless browser. Open a URL, measure how
//! long the load takes, wait for the page to settle, capture a screenshot.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loadspeed::{Config, Runner};
//!
//! # #[tokio::main]
//! # async fn main() -> loadspeed::Result<()> {
//! let config = Config::for_url("https://example.com");
//! let mut runner = Runner::new(&config.browser).await?;
//! let result = runner.run(&config).await?;
//! println!("Loaded: {} ({:?}ms)", result.loaded, result.load_ms);
//! runner.close().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod runner;

pub use config::{BrowserConfig, CaptureConfig, Config, TargetUrl, Viewport};
pub use runner::{RunResult, Runner};

/// Result type for loadspeed operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during config loading or a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser error: {0}")]
    Browser(#[from] eoka::Error),
}

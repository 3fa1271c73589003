pub mod schema;

pub use schema::{BrowserConfig, CaptureConfig, Config, TargetUrl, Viewport};

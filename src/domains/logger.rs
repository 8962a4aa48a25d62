use chrono::Utc;
use log::{error as log_error, info as log_info, warn as log_warn};
use std::sync::Arc;

/// Logging port the dashboard service reports through.
/// Non-fallible from the caller's side: a logger that cannot write drops the line.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub type DynLogger = Arc<dyn DomainLogger>;

/// `log`-facade logger; lines carry an RFC 3339 timestamp and the component tag.
pub struct FileLogger {
    component: String,
}

impl FileLogger {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    /// Install `fast_log` as the global `log` backend appending to `path`.
    pub fn init(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fast_log::init(
            fast_log::config::Config::new()
                .file(path)
                .level(log::LevelFilter::Info),
        )?;
        Ok(())
    }
}

impl DomainLogger for FileLogger {
    fn info(&self, msg: &str) {
        log_info!("{} [{}] {}", Utc::now().to_rfc3339(), self.component, msg);
    }

    fn warn(&self, msg: &str) {
        log_warn!("{} [{}] {}", Utc::now().to_rfc3339(), self.component, msg);
    }

    fn error(&self, msg: &str) {
        log_error!("{} [{}] {}", Utc::now().to_rfc3339(), self.component, msg);
    }
}

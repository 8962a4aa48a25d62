use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Fans every line out to a list of loggers, in order.
pub struct MultiLogger {
    targets: Vec<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(targets: Vec<Arc<dyn DomainLogger>>) -> Self {
        Self { targets }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.targets.iter().for_each(|t| t.error(msg));
    }
}

/// Console logger, plus the file logger when `file` is set and can be opened.
pub fn init_dashboard_logger(file: Option<&str>) -> Arc<dyn DomainLogger> {
    let console = crate::adapters::outbound::init_console_logger();
    let Some(path) = file else {
        return console;
    };
    match crate::adapters::outbound::init_file_logger(path, "dashboard") {
        Ok(file_logger) => Arc::new(MultiLogger::new(vec![file_logger, console])),
        Err(e) => {
            tracing::warn!("{}; logging to console only", e);
            console
        }
    }
}

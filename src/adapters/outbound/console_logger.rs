use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Routes dashboard log lines into `tracing`, so they follow the
/// subscriber installed by the binary.
struct TracingBridge;

impl DomainLogger for TracingBridge {
    fn info(&self, msg: &str) {
        tracing::info!(target: "dashboard", "{}", msg);
    }

    fn warn(&self, msg: &str) {
        tracing::warn!(target: "dashboard", "{}", msg);
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "dashboard", "{}", msg);
    }
}

/// Console logger used when no log file is configured
pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(TracingBridge)
}

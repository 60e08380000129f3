use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `pricewise` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pricewise", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pricewise", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pricewise", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pricewise", "{}", message);
    }
}

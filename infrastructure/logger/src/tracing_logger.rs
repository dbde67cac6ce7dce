use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log messages to `tracing` under the `assistant` target,
/// so `RUST_LOG=assistant=debug` shows use case activity.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "assistant", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "assistant", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "assistant", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "assistant", "{}", message);
    }
}

/// Logging port used by use cases and plugins.
///
/// Implementations decide where messages go; the assistant binary wires
/// a `tracing` adapter.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

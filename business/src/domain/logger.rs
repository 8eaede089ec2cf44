/// Logging port used by every application service.
///
/// Adapters decide where messages end up; the domain only emits plain text.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

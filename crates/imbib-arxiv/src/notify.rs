//! User-facing notifications
//!
//! Informational only: a notifier cannot fail or alter what is rendered.

/// Receives short status messages
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Forwards messages to the `tracing` subscriber at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

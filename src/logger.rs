//! Diagnostic sink handed to scheme handlers.

/// Fire-and-forget diagnostics. Implementations must not panic.
pub trait DrmLogger {
    fn debug(&self, message: &str);
}

impl<T: DrmLogger + ?Sized> DrmLogger for &T {
    fn debug(&self, message: &str) {
        (**self).debug(message)
    }
}

/// Forwards to the `log` facade, tagging records with the component name as
/// their target.
#[derive(Debug, Clone)]
pub struct LogSink {
    pub(crate) component: &'static str,
}

impl LogSink {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl DrmLogger for LogSink {
    fn debug(&self, message: &str) {
        log::debug!(target: self.component, "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl DrmLogger for NoopLogger {
    fn debug(&self, _message: &str) {}
}

use std::path::PathBuf;

/// Severity of a diagnostic forwarded to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Services the host editor provides to an accessor
///
/// The project path lookup is only valid on the host's main thread; accessors
/// check `is_on_main_thread` before calling it.
pub trait HostServices: Send + Sync {
    /// Path of the project or solution currently open in the host
    fn current_project_path(&self) -> Option<PathBuf>;

    /// Whether the calling thread is the host's main thread
    fn is_on_main_thread(&self) -> bool;

    /// Forward a diagnostic to the host's message log
    fn report(&self, _severity: Severity, _message: &str) {}
}

impl<H: HostServices + ?Sized> HostServices for std::sync::Arc<H> {
    fn current_project_path(&self) -> Option<PathBuf> {
        (**self).current_project_path()
    }

    fn is_on_main_thread(&self) -> bool {
        (**self).is_on_main_thread()
    }

    fn report(&self, severity: Severity, message: &str) {
        (**self).report(severity, message)
    }
}

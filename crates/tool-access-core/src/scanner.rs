use crate::process::{PlatformServices, ProcessHandle, executable_base_name};
use tracing::debug;

/// Finds running instances of an executable by name
pub struct ProcessScanner<'a, P: ?Sized> {
    platform: &'a P,
}

impl<'a, P: PlatformServices + ?Sized> ProcessScanner<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Return the first running process whose executable name matches
    ///
    /// Names are compared by base name, ignoring case. Every call takes a new
    /// snapshot of the process table. A snapshot that cannot be taken counts
    /// as "not running".
    pub fn find_running_process(&self, executable_name: &str) -> Option<ProcessHandle> {
        let wanted = executable_base_name(executable_name).to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        let processes = match self.platform.list_processes() {
            Ok(processes) => processes,
            Err(e) => {
                debug!(error = %e, "Failed to snapshot the process table");
                return None;
            }
        };

        let found = processes
            .into_iter()
            .find(|p| executable_base_name(&p.name).to_lowercase() == wanted);

        match &found {
            Some(process) => debug!(pid = %process.pid, name = %wanted, "Found running process"),
            None => debug!(name = %wanted, "No running process found"),
        }
        found
    }
}

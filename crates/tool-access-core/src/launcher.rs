use crate::process::{PlatformServices, SpawnRequest};
use tracing::{info, warn};

/// Fire-and-forget launcher for external processes
pub struct ToolLauncher<'a, P: ?Sized> {
    platform: &'a P,
}

impl<'a, P: PlatformServices + ?Sized> ToolLauncher<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Start the requested process and report whether the OS accepted it
    ///
    /// The launched process is not waited on or tracked afterwards.
    pub fn launch(&self, request: &SpawnRequest) -> bool {
        match self.platform.spawn_process(request) {
            Ok(pid) => {
                info!(
                    pid = %pid,
                    executable = %request.executable.display(),
                    argument = ?request.argument,
                    detached = request.detached,
                    "Launched external tool"
                );
                true
            }
            Err(e) => {
                warn!(
                    executable = %request.executable.display(),
                    error = %e,
                    "Failed to launch external tool"
                );
                false
            }
        }
    }
}

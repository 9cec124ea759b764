#[cfg(unix)]
mod unix_impl {
    use anyhow::{Result, bail};
    use std::io;
    use std::os::unix::process::CommandExt;
    use std::path::Path;
    use std::process::{Command, Stdio};
    use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
    use tool_access_core::{
        DirectoryEntry, EntryKind, PlatformServices, ProcessHandle, ProcessId, SpawnRequest,
        probe_entry_kind, read_directory_children,
    };
    use tracing::{debug, info, warn};

    /// Unix-specific platform services
    pub struct UnixPlatform;

    impl Default for UnixPlatform {
        fn default() -> Self {
            Self::new()
        }
    }

    impl UnixPlatform {
        pub fn new() -> Self {
            info!("Initializing Unix platform services");
            Self
        }

        /// Name a process is known by
        ///
        /// The kernel truncates process names to 15 bytes, so a name that is a
        /// prefix of the executable's file name is widened to the full file name.
        fn process_name(process: &sysinfo::Process) -> String {
            let name = process.name().to_string_lossy();
            let exe_name = process
                .exe()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy());

            match exe_name {
                Some(exe_name) if !name.is_empty() && exe_name.starts_with(&*name) => {
                    exe_name.into_owned()
                }
                _ => name.into_owned(),
            }
        }
    }

    impl PlatformServices for UnixPlatform {
        fn list_processes(&self) -> Result<Vec<ProcessHandle>> {
            if !sysinfo::IS_SUPPORTED_SYSTEM {
                bail!("process listing is not supported on this system");
            }

            // A fresh System per call: every scan must see the current table
            let mut system = System::new();
            system.refresh_processes_specifics(
                ProcessesToUpdate::All,
                true,
                ProcessRefreshKind::nothing().with_exe(UpdateKind::OnlyIfNotSet),
            );

            let processes: Vec<ProcessHandle> = system
                .processes()
                .iter()
                .filter(|(_, process)| process.thread_kind().is_none())
                .map(|(pid, process)| ProcessHandle::new(pid.as_u32(), Self::process_name(process)))
                .collect();

            debug!(count = processes.len(), "Snapshot of Unix process table");
            Ok(processes)
        }

        fn list_directory_children(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
            read_directory_children(path)
        }

        fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
            probe_entry_kind(path)
        }

        fn spawn_process(&self, request: &SpawnRequest) -> io::Result<ProcessId> {
            let mut cmd = Command::new(&request.executable);
            cmd.arg(&request.argument)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());

            // New process group so the tool outlives signals sent to the host's group
            if request.detached {
                cmd.process_group(0);
            }

            let mut child = cmd.spawn()?;
            let pid = ProcessId::from(child.id());

            // Reap the child in the background so it never lingers as a zombie
            let reaper = std::thread::Builder::new()
                .name(format!("reap-{pid}"))
                .spawn(move || {
                    if let Err(e) = child.wait() {
                        warn!(pid = %pid, error = %e, "Failed to reap external tool");
                    }
                });
            if let Err(e) = reaper {
                warn!(pid = %pid, error = %e, "Failed to start reaper thread");
            }

            info!(
                pid = %pid,
                command = %request.executable.display(),
                argument = ?request.argument,
                "Spawned Unix process"
            );
            Ok(pid)
        }
    }

}

// Re-export the Unix implementation when on Unix systems
#[cfg(unix)]
pub use unix_impl::UnixPlatform;

// Provide a stub implementation for non-Unix systems
#[cfg(not(unix))]
pub struct UnixPlatform;

#[cfg(not(unix))]
impl UnixPlatform {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(unix))]
impl Default for UnixPlatform {
    fn default() -> Self {
        Self::new()
    }
}

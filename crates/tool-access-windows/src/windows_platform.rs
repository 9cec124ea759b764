#[cfg(windows)]
mod windows_impl {
    use anyhow::{Context, Result};
    use std::io;
    use std::os::windows::process::CommandExt;
    use std::path::Path;
    use std::process::{Command, Stdio};
    use tool_access_core::{
        DirectoryEntry, EntryKind, PlatformServices, ProcessHandle, ProcessId, SpawnRequest,
        probe_entry_kind, read_directory_children,
    };
    use tracing::{debug, info, warn};
    use windows::Win32::Foundation::{CloseHandle, HANDLE};
    use windows::Win32::System::Diagnostics::ToolHelp::{
        CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
        TH32CS_SNAPPROCESS,
    };

    // Process creation flags
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;

    /// Owned ToolHelp snapshot handle, closed on drop
    struct ProcessSnapshot(HANDLE);

    impl ProcessSnapshot {
        fn take() -> Result<Self> {
            // SAFETY: takes no pointers; the returned handle is owned by the guard
            let handle = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
                .context("Failed to create process snapshot")?;
            Ok(Self(handle))
        }

        fn entries(&self) -> Result<Vec<ProcessHandle>> {
            let mut entry = PROCESSENTRY32W {
                dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
                ..Default::default()
            };
            let mut processes = Vec::new();

            // SAFETY: the snapshot handle is open and `entry.dwSize` is set
            unsafe { Process32FirstW(self.0, &mut entry) }
                .context("Failed to read first process entry")?;

            loop {
                processes.push(ProcessHandle::new(
                    entry.th32ProcessID,
                    exe_file_name(&entry.szExeFile),
                ));

                // SAFETY: as above; an error means the snapshot is exhausted
                if unsafe { Process32NextW(self.0, &mut entry) }.is_err() {
                    break;
                }
            }

            Ok(processes)
        }
    }

    impl Drop for ProcessSnapshot {
        fn drop(&mut self) {
            // SAFETY: the handle came from CreateToolhelp32Snapshot and is closed only here
            if let Err(e) = unsafe { CloseHandle(self.0) } {
                warn!(error = %e, "Failed to close process snapshot");
            }
        }
    }

    fn exe_file_name(raw: &[u16]) -> String {
        let len = raw.iter().position(|&c| c == 0).unwrap_or(raw.len());
        String::from_utf16_lossy(&raw[..len])
    }

    /// Windows-specific platform services
    pub struct WindowsPlatform;

    impl Default for WindowsPlatform {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WindowsPlatform {
        pub fn new() -> Self {
            info!("Initializing Windows platform services");
            Self
        }
    }

    impl PlatformServices for WindowsPlatform {
        fn list_processes(&self) -> Result<Vec<ProcessHandle>> {
            let snapshot = ProcessSnapshot::take()?;
            let processes = snapshot.entries()?;
            debug!(count = processes.len(), "Snapshot of Windows process table");
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

            if request.detached {
                cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
            }

            // Dropping the child closes its handle without waiting on it
            let child = cmd.spawn()?;
            let pid = ProcessId::from(child.id());

            info!(
                pid = %pid,
                command = %request.executable.display(),
                argument = ?request.argument,
                "Spawned Windows process"
            );
            Ok(pid)
        }
    }

}

// Re-export the Windows implementation when on Windows systems
#[cfg(windows)]
pub use windows_impl::WindowsPlatform;

// Provide a stub implementation for non-Windows systems
#[cfg(not(windows))]
pub struct WindowsPlatform;

#[cfg(not(windows))]
impl WindowsPlatform {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(windows))]
impl Default for WindowsPlatform {
    fn default() -> Self {
        Self::new()
    }
}

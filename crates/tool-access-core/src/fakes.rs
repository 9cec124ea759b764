//! In-memory platform and host services for unit tests

use crate::host::{HostServices, Severity};
use crate::process::{
    DirectoryEntry, EntryKind, PlatformServices, ProcessHandle, ProcessId, SpawnRequest,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

#[derive(Default)]
pub struct FakePlatform {
    processes: Mutex<Vec<ProcessHandle>>,
    snapshot_fails: AtomicBool,
    entries: Mutex<Vec<(PathBuf, EntryKind)>>,
    spawns: Mutex<Vec<SpawnRequest>>,
    spawn_fails: AtomicBool,
    next_pid: AtomicU32,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            next_pid: AtomicU32::new(10_000),
            ..Default::default()
        }
    }

    pub fn add_process(&self, pid: u32, name: &str) {
        self.processes
            .lock()
            .unwrap()
            .push(ProcessHandle::new(pid, name));
    }

    pub fn fail_process_snapshot(&self) {
        self.snapshot_fails.store(true, Ordering::SeqCst);
    }

    pub fn fail_spawns(&self) {
        self.spawn_fails.store(true, Ordering::SeqCst);
    }

    /// Add a directory and any missing ancestors
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), EntryKind::Directory);
    }

    /// Add a file, creating its ancestors as directories
    pub fn add_file(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), EntryKind::File);
    }

    pub fn spawns(&self) -> Vec<SpawnRequest> {
        self.spawns.lock().unwrap().clone()
    }

    fn insert(&self, path: &Path, kind: EntryKind) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.insert(parent, EntryKind::Directory);
        }
        let mut entries = self.entries.lock().unwrap();
        if !entries.iter().any(|(p, _)| p == path) {
            entries.push((path.to_path_buf(), kind));
        }
    }
}

impl PlatformServices for FakePlatform {
    fn list_processes(&self) -> anyhow::Result<Vec<ProcessHandle>> {
        if self.snapshot_fails.load(Ordering::SeqCst) {
            anyhow::bail!("snapshot unavailable");
        }
        Ok(self.processes.lock().unwrap().clone())
    }

    fn list_directory_children(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        if self.entry_kind(path) != Some(EntryKind::Directory) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, kind)| DirectoryEntry {
                name: p.file_name().unwrap_or_default().to_os_string(),
                path: p.clone(),
                is_directory: *kind == EntryKind::Directory,
            })
            .collect())
    }

    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, kind)| *kind)
    }

    fn spawn_process(&self, request: &SpawnRequest) -> io::Result<ProcessId> {
        self.spawns.lock().unwrap().push(request.clone());
        if self.spawn_fails.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        Ok(ProcessId(self.next_pid.fetch_add(1, Ordering::SeqCst)))
    }
}

#[derive(Default)]
pub struct FakeHost {
    project_path: Mutex<Option<PathBuf>>,
    off_main_thread: AtomicBool,
    lookups: AtomicUsize,
    reports: Mutex<Vec<(Severity, String)>>,
}

impl FakeHost {
    pub fn with_project(path: impl Into<PathBuf>) -> Self {
        let host = Self::default();
        host.set_project(Some(path.into()));
        host
    }

    pub fn set_project(&self, path: Option<PathBuf>) {
        *self.project_path.lock().unwrap() = path;
    }

    pub fn set_main_thread(&self, on_main_thread: bool) {
        self.off_main_thread.store(!on_main_thread, Ordering::SeqCst);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn reports(&self) -> Vec<(Severity, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl HostServices for FakeHost {
    fn current_project_path(&self) -> Option<PathBuf> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.project_path.lock().unwrap().clone()
    }

    fn is_on_main_thread(&self) -> bool {
        !self.off_main_thread.load(Ordering::SeqCst)
    }

    fn report(&self, severity: Severity, message: &str) {
        self.reports
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

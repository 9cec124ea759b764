use anyhow::Result;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Unique identifier for a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub u32);

impl From<u32> for ProcessId {
    fn from(pid: u32) -> Self {
        Self(pid)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A process seen in a single snapshot of the OS process table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessHandle {
    pub pid: ProcessId,
    /// Executable file name, without directory
    pub name: String,
}

impl ProcessHandle {
    pub fn new(pid: impl Into<ProcessId>, name: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            name: name.into(),
        }
    }
}

/// What a path on disk turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: OsString,
    pub path: PathBuf,
    pub is_directory: bool,
}

/// Description of a single external process launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub executable: PathBuf,
    /// Passed to the executable as its only argument, byte for byte
    pub argument: OsString,
    pub detached: bool,
}

impl SpawnRequest {
    /// A detached launch of `executable` with one argument
    pub fn detached(executable: impl Into<PathBuf>, argument: impl Into<OsString>) -> Self {
        Self {
            executable: executable.into(),
            argument: argument.into(),
            detached: true,
        }
    }
}

/// OS services the accessor logic depends on
///
/// Implemented once per platform by the platform crates, and by in-memory fakes
/// in tests. Every call is synchronous and reflects the state of the system at
/// call time; implementations must not cache.
pub trait PlatformServices: Send + Sync {
    /// Snapshot the running processes
    fn list_processes(&self) -> Result<Vec<ProcessHandle>>;

    /// List the immediate children of a directory, in the order the OS yields them
    fn list_directory_children(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>>;

    /// Probe a path, returning `None` if nothing exists there
    fn entry_kind(&self, path: &Path) -> Option<EntryKind>;

    /// Start a process without waiting for it and without keeping a handle to it
    fn spawn_process(&self, request: &SpawnRequest) -> io::Result<ProcessId>;
}

/// Factory trait for creating platform-specific services
pub trait PlatformFactory {
    /// The type of platform services this factory creates
    type Platform: PlatformServices;

    /// Create the platform services for the current platform
    fn create_platform() -> Self::Platform;

    /// Get the platform name for logging and debugging
    fn platform_name() -> &'static str;
}

impl<P: PlatformServices + ?Sized> PlatformServices for Box<P> {
    fn list_processes(&self) -> Result<Vec<ProcessHandle>> {
        (**self).list_processes()
    }

    fn list_directory_children(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        (**self).list_directory_children(path)
    }

    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        (**self).entry_kind(path)
    }

    fn spawn_process(&self, request: &SpawnRequest) -> io::Result<ProcessId> {
        (**self).spawn_process(request)
    }
}

/// Directory listing shared by the platform crates
///
/// Entries that fail to read mid-iteration are skipped rather than failing the
/// whole listing.
pub fn read_directory_children(path: &Path) -> io::Result<Vec<DirectoryEntry>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(path)? {
        let Ok(entry) = entry else {
            continue;
        };
        let path = entry.path();
        // Follow symlinks so a linked version directory still counts
        let is_directory = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        children.push(DirectoryEntry {
            name: entry.file_name(),
            path,
            is_directory,
        });
    }
    Ok(children)
}

/// Path probe shared by the platform crates
pub fn probe_entry_kind(path: &Path) -> Option<EntryKind> {
    let metadata = fs::metadata(path).ok()?;
    Some(if metadata.is_dir() {
        EntryKind::Directory
    } else if metadata.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    })
}

/// Base name of an executable path, as compared by the scanner
pub fn executable_base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

use crate::config::ToolConfig;
use crate::error::{AccessError, AccessResult, UnsupportedOperation};
use crate::host::{HostServices, Severity};
use crate::launcher::ToolLauncher;
use crate::locator::{ToolInstallation, ToolLocator};
use crate::process::{PlatformServices, ProcessHandle, SpawnRequest};
use crate::scanner::ProcessScanner;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Project files directory, relative to the directory holding the host's solution
pub const PROJECT_FILES_SUBPATH: &str = "Intermediate/ProjectFiles";

/// Capability interface a host uses to drive an external source code tool
///
/// Hosts keep a registry of `Box<dyn SourceCodeAccessor>` and pick one per
/// user preference; each external tool is one implementation.
pub trait SourceCodeAccessor: Send + Sync {
    /// Whether the tool is installed and can be launched
    fn can_access_tool(&self) -> bool;

    /// Stable name the accessor is registered under
    fn identifier(&self) -> &str;

    fn display_name(&self) -> &str;

    fn description(&self) -> &str;

    /// Open the host's current project in the tool
    fn open_project(&self) -> AccessResult<()>;

    /// Open a file in the tool and move the cursor to `line` and `column`
    fn open_file_at_line(&self, path: &Path, line: u32, column: u32) -> AccessResult<()>;

    /// Open a set of source files; either all open or the call fails
    fn open_files(&self, paths: &[PathBuf]) -> AccessResult<()>;

    /// Add new source files to the tool's view of the project
    fn add_files(&self, paths: &[PathBuf], available_modules: &[String]) -> AccessResult<()>;

    fn save_all_open_documents(&self) -> AccessResult<()>;

    /// Periodic hook driven by the host
    fn tick(&self, delta_time: Duration);
}

/// Observable progress of an accessor operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessorState {
    #[default]
    Idle,
    /// Looking for a running instance and an installation
    Checking,
    /// Spawning the tool
    Launching,
    /// The last operation stopped before spawning
    Aborted,
}

/// Accessor for one external tool, built from the platform and host services
pub struct ExternalToolAccessor<P, H> {
    config: ToolConfig,
    platform: P,
    host: H,
    /// Last solution path obtained on the host's main thread
    solution_path: RwLock<Option<PathBuf>>,
    state: Mutex<AccessorState>,
}

impl<P: PlatformServices, H: HostServices> ExternalToolAccessor<P, H> {
    /// Create an accessor after validating its configuration
    pub fn new(config: ToolConfig, platform: P, host: H) -> AccessResult<Self> {
        config
            .validate()
            .map_err(|e| AccessError::Configuration(e.to_string()))?;

        info!(
            identifier = %config.identifier,
            install_root = %config.install_root.display(),
            "Creating external tool accessor"
        );

        Ok(Self {
            config,
            platform,
            host,
            solution_path: RwLock::new(None),
            state: Mutex::new(AccessorState::Idle),
        })
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn state(&self) -> AccessorState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Probe the install root for the tool; never cached
    pub fn installation(&self) -> Option<ToolInstallation> {
        ToolLocator::new(&self.platform)
            .locate(&self.config.install_root, &self.config.relative_binary)
    }

    /// Scan the process table for a running instance of the tool
    pub fn running_instance(&self) -> Option<ProcessHandle> {
        ProcessScanner::new(&self.platform).find_running_process(&self.config.process_name)
    }

    /// Absolute path of the host's open solution
    ///
    /// Asks the host only when called on its main thread and otherwise returns
    /// the value cached by the last main-thread call.
    pub fn solution_path(&self) -> Option<PathBuf> {
        if self.host.is_on_main_thread() {
            if let Some(path) = self.host.current_project_path() {
                let path = std::path::absolute(&path).unwrap_or(path);
                debug!(path = %path.display(), "Refreshed solution path");
                *self
                    .solution_path
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = Some(path);
            }
        }

        self.solution_path
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_state(&self, state: AccessorState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn abort(&self, error: AccessError) -> AccessResult<()> {
        warn!(identifier = %self.config.identifier, error = %error, "Not opening project");
        self.host.report(Severity::Warning, &error.to_string());
        self.set_state(AccessorState::Aborted);
        Err(error)
    }

    fn unsupported(&self, operation: UnsupportedOperation) -> AccessResult<()> {
        warn!(identifier = %self.config.identifier, "Not supported: {operation}");
        Err(AccessError::Unsupported(operation))
    }
}

/// Argument handed to the tool: the project files directory next to the solution
///
/// With no known solution this is the bare relative subpath.
pub fn project_files_argument(solution_path: &Path) -> OsString {
    solution_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(PROJECT_FILES_SUBPATH)
        .into_os_string()
}

impl<P: PlatformServices, H: HostServices> SourceCodeAccessor for ExternalToolAccessor<P, H> {
    fn can_access_tool(&self) -> bool {
        self.installation().is_some()
    }

    fn identifier(&self) -> &str {
        &self.config.identifier
    }

    fn display_name(&self) -> &str {
        &self.config.display_name
    }

    fn description(&self) -> &str {
        &self.config.description
    }

    fn open_project(&self) -> AccessResult<()> {
        self.set_state(AccessorState::Checking);

        if let Some(process) = self.running_instance() {
            return self.abort(AccessError::Unsupported(
                UnsupportedOperation::AttachToRunningInstance { pid: process.pid },
            ));
        }

        let Some(installation) = self.installation() else {
            return self.abort(AccessError::ToolNotFound {
                root: self.config.install_root.clone(),
            });
        };

        let solution_path = self.solution_path().unwrap_or_default();
        if solution_path.as_os_str().is_empty() {
            debug!("No solution path known, launching with the relative project files path");
        }

        let request = SpawnRequest::detached(
            installation.executable,
            project_files_argument(&solution_path),
        );

        self.set_state(AccessorState::Launching);
        let launched = ToolLauncher::new(&self.platform).launch(&request);
        self.set_state(AccessorState::Idle);

        if launched {
            Ok(())
        } else {
            let error = AccessError::SpawnFailed {
                executable: request.executable,
            };
            self.host.report(Severity::Error, &error.to_string());
            Err(error)
        }
    }

    fn open_file_at_line(&self, path: &Path, line: u32, column: u32) -> AccessResult<()> {
        self.open_project()?;
        debug!(path = %path.display(), line, column, "Requested file position");
        self.unsupported(UnsupportedOperation::OpenFileAtLine)
    }

    fn open_files(&self, paths: &[PathBuf]) -> AccessResult<()> {
        self.open_project()?;
        for path in paths {
            debug!(path = %path.display(), "Requested source file");
        }
        self.unsupported(UnsupportedOperation::OpenFiles)
    }

    fn add_files(&self, _paths: &[PathBuf], _available_modules: &[String]) -> AccessResult<()> {
        self.unsupported(UnsupportedOperation::AddFiles)
    }

    fn save_all_open_documents(&self) -> AccessResult<()> {
        self.unsupported(UnsupportedOperation::SaveAllOpenDocuments)
    }

    fn tick(&self, _delta_time: Duration) {}
}

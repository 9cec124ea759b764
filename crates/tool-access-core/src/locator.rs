use crate::process::{EntryKind, PlatformServices};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An installation of the external tool found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInstallation {
    /// The configured install root that was searched
    pub root: PathBuf,
    /// Full path of the tool's executable
    pub executable: PathBuf,
}

/// Looks for the tool under an install root laid out as `<root>/<version>/<binary>`
pub struct ToolLocator<'a, P: ?Sized> {
    platform: &'a P,
}

impl<'a, P: PlatformServices + ?Sized> ToolLocator<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Find the executable below the first version directory of `root`
    ///
    /// The first subdirectory is taken in whatever order the OS lists them, so
    /// with several versions installed the pick is unspecified.
    pub fn locate(&self, root: &Path, relative_binary: &Path) -> Option<ToolInstallation> {
        if self.platform.entry_kind(root) != Some(EntryKind::Directory) {
            debug!(root = %root.display(), "Install root does not exist");
            return None;
        }

        let children = match self.platform.list_directory_children(root) {
            Ok(children) => children,
            Err(e) => {
                debug!(root = %root.display(), error = %e, "Failed to list install root");
                return None;
            }
        };

        let Some(version_dir) = children.into_iter().find(|c| c.is_directory) else {
            debug!(root = %root.display(), "Install root has no version directory");
            return None;
        };

        let executable = version_dir.path.join(relative_binary);
        if self.platform.entry_kind(&executable) != Some(EntryKind::File) {
            debug!(path = %executable.display(), "Tool executable not found");
            return None;
        }

        debug!(path = %executable.display(), "Located tool executable");
        Some(ToolInstallation {
            root: root.to_path_buf(),
            executable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakePlatform;

    #[test]
    fn test_missing_root() {
        let platform = FakePlatform::new();
        let locator = ToolLocator::new(&platform);
        assert_eq!(locator.locate(Path::new("/qt"), Path::new("bin/tool.exe")), None);
    }

    #[test]
    fn test_root_that_is_a_file() {
        let platform = FakePlatform::new();
        platform.add_file("/qt");
        let locator = ToolLocator::new(&platform);
        assert_eq!(locator.locate(Path::new("/qt"), Path::new("bin/tool.exe")), None);
    }

    #[test]
    fn test_root_without_subdirectories() {
        let platform = FakePlatform::new();
        platform.add_dir("/qt");
        platform.add_file("/qt/maintenancetool.exe");
        let locator = ToolLocator::new(&platform);
        assert_eq!(locator.locate(Path::new("/qt"), Path::new("bin/tool.exe")), None);
    }

    #[test]
    fn test_missing_binary() {
        let platform = FakePlatform::new();
        platform.add_dir("/qt/1.0/bin");
        let locator = ToolLocator::new(&platform);
        assert_eq!(locator.locate(Path::new("/qt"), Path::new("bin/tool.exe")), None);
    }

    #[test]
    fn test_binary_that_is_a_directory() {
        let platform = FakePlatform::new();
        platform.add_dir("/qt/1.0/bin/tool.exe");
        let locator = ToolLocator::new(&platform);
        assert_eq!(locator.locate(Path::new("/qt"), Path::new("bin/tool.exe")), None);
    }

    #[test]
    fn test_single_version_directory() {
        let platform = FakePlatform::new();
        platform.add_file("/qt/1.0/bin/tool.exe");
        let locator = ToolLocator::new(&platform);

        let installation = locator
            .locate(Path::new("/qt"), Path::new("bin/tool.exe"))
            .unwrap();
        assert_eq!(installation.root, PathBuf::from("/qt"));
        assert_eq!(installation.executable, PathBuf::from("/qt/1.0/bin/tool.exe"));
    }

    #[test]
    fn test_first_listed_directory_wins() {
        let platform = FakePlatform::new();
        platform.add_file("/qt/notes.txt");
        platform.add_dir("/qt/5.9.1");
        platform.add_file("/qt/5.10.0/bin/tool.exe");
        let locator = ToolLocator::new(&platform);

        // 5.9.1 is listed first and has no binary, so nothing is found
        assert_eq!(locator.locate(Path::new("/qt"), Path::new("bin/tool.exe")), None);
    }
}

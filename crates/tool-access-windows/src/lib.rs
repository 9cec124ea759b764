//! Windows platform services backed by the ToolHelp snapshot API

mod windows_platform;

pub use windows_platform::WindowsPlatform;

/// Factory for the Windows platform services
pub struct WindowsPlatformFactory;

#[cfg(windows)]
impl tool_access_core::PlatformFactory for WindowsPlatformFactory {
    type Platform = WindowsPlatform;

    fn create_platform() -> Self::Platform {
        WindowsPlatform::new()
    }

    fn platform_name() -> &'static str {
        "Windows"
    }
}

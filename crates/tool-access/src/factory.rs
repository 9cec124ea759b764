use tool_access_core::PlatformFactory;

/// Platform-independent factory that selects the appropriate implementation at compile time
pub struct NativePlatformFactory;

impl PlatformFactory for NativePlatformFactory {
    #[cfg(unix)]
    type Platform = tool_access_unix::UnixPlatform;

    #[cfg(windows)]
    type Platform = tool_access_windows::WindowsPlatform;

    fn create_platform() -> Self::Platform {
        #[cfg(unix)]
        return tool_access_unix::UnixPlatformFactory::create_platform();

        #[cfg(windows)]
        return tool_access_windows::WindowsPlatformFactory::create_platform();
    }

    fn platform_name() -> &'static str {
        #[cfg(unix)]
        return tool_access_unix::UnixPlatformFactory::platform_name();

        #[cfg(windows)]
        return tool_access_windows::WindowsPlatformFactory::platform_name();
    }
}

/// Platform services for the platform this crate was built for
pub type NativePlatform = <NativePlatformFactory as PlatformFactory>::Platform;

//! Unix platform services backed by `sysinfo` and `std::process`

mod unix_platform;

pub use unix_platform::UnixPlatform;

/// Factory for the Unix platform services
pub struct UnixPlatformFactory;

#[cfg(unix)]
impl tool_access_core::PlatformFactory for UnixPlatformFactory {
    type Platform = UnixPlatform;

    fn create_platform() -> Self::Platform {
        UnixPlatform::new()
    }

    fn platform_name() -> &'static str {
        "Unix"
    }
}

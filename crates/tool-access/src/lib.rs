//! Launch and detect external IDEs from a host editor
//!
//! Wires the platform-independent accessor from `tool-access-core` to the
//! native platform services, and provides the Qt Creator accessor.

mod factory;

pub use factory::{NativePlatform, NativePlatformFactory};

use tracing::info;

/// Accessor for an external tool running on the native platform
pub type NativeAccessor<H> = ExternalToolAccessor<NativePlatform, H>;

/// Create an accessor for the tool described by `config`
pub fn native_accessor<H: HostServices>(
    config: ToolConfig,
    host: H,
) -> AccessResult<NativeAccessor<H>> {
    info!(
        platform = NativePlatformFactory::platform_name(),
        identifier = %config.identifier,
        "Creating native accessor"
    );
    ExternalToolAccessor::new(config, NativePlatformFactory::create_platform(), host)
}

/// Create the Qt Creator accessor with its default install layout
pub fn qt_creator_accessor<H: HostServices>(host: H) -> AccessResult<NativeAccessor<H>> {
    native_accessor(ToolConfig::qt_creator(), host)
}

// Re-export core functionality
pub use tool_access_core::*;

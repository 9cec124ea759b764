//! Tool Access Core - Platform-independent external tool detection and launching
//!
//! This crate provides the data model, the platform and host service traits,
//! and the accessor logic shared across platform-specific implementations.

mod accessor;
mod config;
mod error;
mod host;
mod launcher;
mod locator;
mod process;
mod scanner;

#[cfg(test)]
mod fakes;

pub use accessor::*;
pub use config::*;
pub use error::*;
pub use host::*;
pub use launcher::*;
pub use locator::*;
pub use process::*;
pub use scanner::*;

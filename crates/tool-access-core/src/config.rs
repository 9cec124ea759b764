use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity and install layout of one external tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct ToolConfig {
    /// Stable name the host registers the accessor under
    pub identifier: String,

    /// Name shown in the host's UI
    #[serde(default)]
    #[builder(default)]
    pub display_name: String,

    #[serde(default)]
    #[builder(default)]
    pub description: String,

    /// Directory holding one subdirectory per installed version
    #[serde(default = "default_install_root")]
    #[builder(default = "default_install_root()")]
    pub install_root: PathBuf,

    /// Executable path relative to a version directory
    #[serde(default = "default_relative_binary")]
    #[builder(default = "default_relative_binary()")]
    pub relative_binary: PathBuf,

    /// Executable file name to look for in the process table
    #[serde(default = "default_process_name")]
    #[builder(default = "default_process_name()")]
    pub process_name: String,
}

impl ToolConfig {
    pub fn builder() -> ToolConfigBuilder {
        ToolConfigBuilder::default()
    }

    /// Qt Creator installed by the Qt online installer in its default location
    pub fn qt_creator() -> Self {
        Self {
            identifier: "QtCreatorSourceCodeAccessor".to_string(),
            display_name: "Qt Creator 4.x".to_string(),
            description: "Create and write source code with Qt Creator".to_string(),
            install_root: default_install_root(),
            relative_binary: default_relative_binary(),
            process_name: default_process_name(),
        }
    }

    /// Validate the configuration and return errors if invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.identifier.trim().is_empty() {
            return Err(anyhow::anyhow!("identifier cannot be empty"));
        }

        if self.process_name.trim().is_empty() {
            return Err(anyhow::anyhow!("process_name cannot be empty"));
        }

        if self.relative_binary.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("relative_binary cannot be empty"));
        }

        if self.relative_binary.has_root() {
            return Err(anyhow::anyhow!(
                "relative_binary must be relative to a version directory"
            ));
        }

        Ok(())
    }
}

// Default value functions for serde
#[cfg(windows)]
fn default_install_root() -> PathBuf {
    PathBuf::from("c:/Qt")
}

#[cfg(not(windows))]
fn default_install_root() -> PathBuf {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join("Qt"))
        .unwrap_or_else(|| PathBuf::from("/opt/Qt"))
}

#[cfg(windows)]
fn default_relative_binary() -> PathBuf {
    PathBuf::from("Tools/QtCreator/bin/qtcreator.exe")
}

#[cfg(not(windows))]
fn default_relative_binary() -> PathBuf {
    PathBuf::from("Tools/QtCreator/bin/qtcreator")
}

#[cfg(windows)]
fn default_process_name() -> String {
    "qtcreator.exe".to_string()
}

#[cfg(not(windows))]
fn default_process_name() -> String {
    "qtcreator".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qt_creator_preset() {
        let config = ToolConfig::qt_creator();
        assert!(config.validate().is_ok());
        assert_eq!(config.identifier, "QtCreatorSourceCodeAccessor");
        assert_eq!(config.display_name, "Qt Creator 4.x");
        assert!(config.relative_binary.starts_with("Tools/QtCreator/bin"));
        assert!(config.process_name.starts_with("qtcreator"));
    }

    #[test]
    fn test_builder_defaults() {
        let config = ToolConfig::builder()
            .identifier("CustomQt")
            .install_root("/tools/qt")
            .build()
            .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.install_root, PathBuf::from("/tools/qt"));
        assert_eq!(config.relative_binary, default_relative_binary());
        assert_eq!(config.process_name, default_process_name());
        assert!(config.display_name.is_empty());
    }

    #[test]
    fn test_builder_requires_identifier() {
        assert!(ToolConfig::builder().build().is_err());
    }

    #[test]
    fn test_invalid_config() {
        let mut config = ToolConfig {
            identifier: " ".to_string(),
            ..ToolConfig::qt_creator()
        };
        assert!(config.validate().is_err());

        config.identifier = "Qt".to_string();
        config.process_name = String::new();
        assert!(config.validate().is_err());

        config.process_name = "qtcreator".to_string();
        config.relative_binary = PathBuf::from("/usr/bin/qtcreator");
        assert!(config.validate().is_err());

        config.relative_binary = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{ "identifier": "QtCreator", "installRoot": "/srv/qt" }"#;
        let config: ToolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.install_root, PathBuf::from("/srv/qt"));
        assert_eq!(config.relative_binary, default_relative_binary());
        assert_eq!(config.process_name, default_process_name());
    }

    #[test]
    fn test_serialization() {
        let config = ToolConfig::qt_creator();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"relativeBinary\""));
        let deserialized: ToolConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

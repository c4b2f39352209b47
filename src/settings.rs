//! Settings consulted while rendering service messages.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tool name used for inspection categories and internal-error locations.
pub const DEFAULT_TOOL_NAME: &str = "cppcheck";

/// Output settings supplied by the host tool.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Emit verbose message text instead of the short one.
    #[serde(default)]
    pub verbose: bool,
    /// Project roots that absolute report paths are made relative to.
    #[serde(default)]
    pub base_paths: Vec<String>,
    #[serde(default = "default_tool_name")]
    pub tool_name: String,
}

fn default_tool_name() -> String {
    DEFAULT_TOOL_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            base_paths: Vec::new(),
            tool_name: default_tool_name(),
        }
    }
}

impl Settings {
    /// Parse settings from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from YAML text. Missing keys take their defaults.
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_paths.push(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert!(!s.verbose);
        assert!(s.base_paths.is_empty());
        assert_eq!(s.tool_name, "cppcheck");
    }

    #[test]
    fn test_from_yaml_partial() {
        let s = Settings::from_yaml_str("verbose: true\n").unwrap();
        assert!(s.verbose);
        assert_eq!(s.tool_name, "cppcheck");
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(Settings::from_yaml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(Settings::from_yaml_str("verbose: [1, 2").is_err());
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_paths:\n  - /proj\n  - /opt/lib\ntool_name: mytool").unwrap();

        let s = Settings::parse_file(file.path()).unwrap();
        assert_eq!(s.base_paths, vec!["/proj".to_string(), "/opt/lib".to_string()]);
        assert_eq!(s.tool_name, "mytool");
        assert!(!s.verbose);
    }

    #[test]
    fn test_parse_file_missing() {
        assert!(Settings::parse_file("/nonexistent/teamcity-output.yaml").is_err());
    }

    #[test]
    fn test_builders() {
        let s = Settings::default().verbose(true).base_path("/a").base_path("/b");
        assert!(s.verbose);
        assert_eq!(s.base_paths, vec!["/a".to_string(), "/b".to_string()]);
    }
}

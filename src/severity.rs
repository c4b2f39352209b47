//! Severity classification of analysis findings.

use serde::{Deserialize, Serialize};

/// Severity of a reported finding, as classified by the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Error,
    Warning,
    Style,
    Performance,
    Portability,
    Information,
    Debug,
}

impl Severity {
    /// Name used in inspection categories. `None` has an empty name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Style => "style",
            Severity::Performance => "performance",
            Severity::Portability => "portability",
            Severity::Information => "information",
            Severity::Debug => "debug",
        }
    }

    /// Inspection severity label understood by TeamCity.
    ///
    /// `None` means the `SEVERITY` attribute is left out entirely.
    pub fn teamcity_label(&self) -> Option<&'static str> {
        match self {
            Severity::Error => Some("ERROR"),
            Severity::Warning => Some("WARNING"),
            Severity::Information | Severity::Debug | Severity::Style => Some("INFO"),
            Severity::Performance | Severity::Portability => Some("WEAK WARNING"),
            Severity::None => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "" => Ok(Severity::None),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "style" => Ok(Severity::Style),
            "performance" => Ok(Severity::Performance),
            "portability" => Ok(Severity::Portability),
            "information" => Ok(Severity::Information),
            "debug" => Ok(Severity::Debug),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teamcity_labels() {
        assert_eq!(Severity::Error.teamcity_label(), Some("ERROR"));
        assert_eq!(Severity::Warning.teamcity_label(), Some("WARNING"));
        assert_eq!(Severity::Style.teamcity_label(), Some("INFO"));
        assert_eq!(Severity::Information.teamcity_label(), Some("INFO"));
        assert_eq!(Severity::Debug.teamcity_label(), Some("INFO"));
        assert_eq!(Severity::Performance.teamcity_label(), Some("WEAK WARNING"));
        assert_eq!(Severity::Portability.teamcity_label(), Some("WEAK WARNING"));
        assert_eq!(Severity::None.teamcity_label(), None);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Severity::Portability.to_string(), "portability");
        assert_eq!(Severity::None.to_string(), "");
        assert_eq!("".parse::<Severity>(), Ok(Severity::None));
        assert_eq!("none".parse::<Severity>(), Ok(Severity::None));
        assert_eq!("Style".parse::<Severity>(), Ok(Severity::Style));
        assert_eq!("information".parse::<Severity>(), Ok(Severity::Information));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Performance).unwrap();
        assert_eq!(json, "\"performance\"");
        assert_eq!(serde_json::to_string(&Severity::None).unwrap(), "\"none\"");
    }
}

//! Error reports produced by the analysis engine.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One frame of a report's location stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl FileLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// A single diagnostic as reported by the analysis engine.
///
/// The engine also uses this shape for message templates when enumerating
/// the diagnostics a check can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub id: String,
    pub severity: Severity,
    pub short_message: String,
    pub verbose_message: String,
    /// Location stack; the first entry is the primary location.
    #[serde(default)]
    pub call_stack: Vec<FileLocation>,
    /// File used when the location stack is empty.
    #[serde(default)]
    pub file0: String,
    /// CWE classification id.
    #[serde(default)]
    pub cwe: Option<u16>,
    #[serde(default)]
    pub inconclusive: bool,
}

impl ErrorReport {
    /// Create a report without location.
    ///
    /// `msg` is split at the first newline: the first line becomes the short
    /// message and the remainder the verbose one. A single-line message is
    /// used for both.
    pub fn new(id: impl Into<String>, severity: Severity, msg: &str) -> Self {
        let (short, verbose) = match msg.split_once('\n') {
            Some((short, verbose)) => (short, verbose),
            None => (msg, msg),
        };
        Self {
            id: id.into(),
            severity,
            short_message: short.to_string(),
            verbose_message: verbose.to_string(),
            call_stack: Vec::new(),
            file0: String::new(),
            cwe: None,
            inconclusive: false,
        }
    }

    /// Append a frame to the location stack.
    pub fn with_location(mut self, file: impl Into<String>, line: u32, column: u32) -> Self {
        self.call_stack.push(FileLocation::new(file, line, column));
        self
    }

    pub fn with_file0(mut self, file: impl Into<String>) -> Self {
        self.file0 = file.into();
        self
    }

    pub fn with_cwe(mut self, cwe: u16) -> Self {
        self.cwe = Some(cwe);
        self
    }

    pub fn inconclusive(mut self, inconclusive: bool) -> Self {
        self.inconclusive = inconclusive;
        self
    }

    /// Short or verbose message text.
    pub fn message(&self, verbose: bool) -> &str {
        if verbose {
            &self.verbose_message
        } else {
            &self.short_message
        }
    }

    /// Stable encoding of every field, used as the identity of a report.
    pub fn canonical_form(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

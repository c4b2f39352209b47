//! Progress events and coalescing of repeated progress updates.

use serde::{Deserialize, Serialize};

/// A progress update from the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub filename: String,
    pub stage: String,
    /// Completion value reported by the engine. Not used for output.
    #[serde(default)]
    pub value: usize,
}

impl ProgressEvent {
    pub fn new(filename: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            stage: stage.into(),
            value: 0,
        }
    }

    pub fn with_value(mut self, value: usize) -> Self {
        self.value = value;
        self
    }

    /// Text of the emitted progress message.
    pub fn describe(&self) -> String {
        format!("inspecting '{}' stage: {}", self.filename, self.stage)
    }
}

/// Lets a progress event through only when it reaches a new file or stage.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    last: Option<(String, String)>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false`, leaving state untouched, when `event` has the same
    /// filename and stage as the last admitted event.
    pub fn admit(&mut self, event: &ProgressEvent) -> bool {
        if let Some((file, stage)) = &self.last {
            if *file == event.filename && *stage == event.stage {
                return false;
            }
        }
        self.last = Some((event.filename.clone(), event.stage.clone()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_stage_coalesced() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.admit(&ProgressEvent::new("a.c", "tokenize")));
        assert!(!tracker.admit(&ProgressEvent::new("a.c", "tokenize")));
    }

    #[test]
    fn test_value_ignored() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.admit(&ProgressEvent::new("a.c", "tokenize").with_value(10)));
        assert!(!tracker.admit(&ProgressEvent::new("a.c", "tokenize").with_value(90)));
    }

    #[test]
    fn test_new_stage_or_file_admitted() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.admit(&ProgressEvent::new("a.c", "tokenize")));
        assert!(tracker.admit(&ProgressEvent::new("a.c", "simplify")));
        assert!(tracker.admit(&ProgressEvent::new("b.c", "simplify")));
        // Only the last event counts.
        assert!(tracker.admit(&ProgressEvent::new("a.c", "tokenize")));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            ProgressEvent::new("src/a.c", "Tokenize").describe(),
            "inspecting 'src/a.c' stage: Tokenize"
        );
    }
}

//! Suppression of repeated error reports within one run.

use std::collections::HashSet;

use crate::error_report::ErrorReport;

/// Remembers every report admitted during a run.
///
/// Reports are compared by [`ErrorReport::canonical_form`], so two reports
/// are duplicates only when all of their fields match.
#[derive(Debug, Default)]
pub struct DedupGate {
    seen: HashSet<String>,
}

impl DedupGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time a report is seen, `false` afterwards.
    pub fn admit(&mut self, report: &ErrorReport) -> serde_json::Result<bool> {
        Ok(self.seen.insert(report.canonical_form()?))
    }

    /// Number of distinct reports admitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    #[test]
    fn test_admit_once() {
        let mut gate = DedupGate::new();
        let report = ErrorReport::new("nullPointer", Severity::Error, "Null pointer")
            .with_location("a.c", 5, 2);

        assert!(gate.admit(&report).unwrap());
        assert!(!gate.admit(&report).unwrap());
        assert!(!gate.admit(&report.clone()).unwrap());
        assert_eq!(gate.len(), 1);
    }

    #[test]
    fn test_different_reports_admitted() {
        let mut gate = DedupGate::new();
        let a = ErrorReport::new("nullPointer", Severity::Error, "Null pointer");
        let b = ErrorReport::new("nullPointer", Severity::Error, "Null pointer p");
        let c = a.clone().inconclusive(true);

        assert!(gate.admit(&a).unwrap());
        assert!(gate.admit(&b).unwrap());
        assert!(gate.admit(&c).unwrap());
        assert_eq!(gate.len(), 3);
    }

    #[test]
    fn test_admit_report_with_special_characters() {
        let mut gate = DedupGate::new();
        let report = ErrorReport::new("x", Severity::None, "quote \" and\nnewline")
            .with_location("C:\\src\\a.c", 0, 0);
        assert!(gate.admit(&report).unwrap());
        assert!(!gate.admit(&report).unwrap());
    }

    #[test]
    fn test_new_gate_is_empty() {
        assert!(DedupGate::new().is_empty());
    }
}

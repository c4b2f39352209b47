//! Catalog of the checks an analysis engine can run.
//!
//! Each check enumerates a template [`ErrorReport`] for every diagnostic it
//! is able to produce. The output layer turns those templates into
//! `inspectionType` messages so TeamCity knows every inspection up front.

use crate::error_report::ErrorReport;
use crate::settings::Settings;

/// A check registered with the analysis engine.
pub trait Check: Send + Sync {
    /// Returns the check's name (e.g., "Null pointer").
    fn name(&self) -> &str;

    /// Call `report` once per diagnostic this check can produce.
    fn error_message_templates(&self, settings: &Settings, report: &mut dyn FnMut(ErrorReport));
}

/// Source of registered checks.
pub trait CheckCatalog {
    /// Visit every registered check in registration order.
    fn for_each_check(&self, visit: &mut dyn FnMut(&dyn Check));
}

/// An owned, ordered set of checks.
#[derive(Default)]
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C: Check + 'static>(&mut self, check: C) -> &mut Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Look up a registered check by name.
    pub fn get(&self, name: &str) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }
}

impl CheckCatalog for CheckRegistry {
    fn for_each_check(&self, visit: &mut dyn FnMut(&dyn Check)) {
        for check in &self.checks {
            visit(check.as_ref());
        }
    }
}

/// A check described by a fixed list of templates.
///
/// Useful for engines that keep their diagnostic metadata in tables.
pub struct StaticCheck {
    name: String,
    templates: Vec<ErrorReport>,
}

impl StaticCheck {
    pub fn new(name: impl Into<String>, templates: Vec<ErrorReport>) -> Self {
        Self {
            name: name.into(),
            templates,
        }
    }
}

impl Check for StaticCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn error_message_templates(&self, _settings: &Settings, report: &mut dyn FnMut(ErrorReport)) {
        for template in &self.templates {
            report(template.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    fn null_pointer_check() -> StaticCheck {
        StaticCheck::new(
            "Null pointer",
            vec![
                ErrorReport::new("nullPointer", Severity::Error, "Null pointer dereference"),
                ErrorReport::new("nullPointerDefaultArg", Severity::Warning, "Possible null pointer"),
            ],
        )
    }

    #[test]
    fn test_registry_order_and_lookup() {
        let mut registry = CheckRegistry::new();
        registry
            .register(null_pointer_check())
            .register(StaticCheck::new("Other", vec![]));

        let mut names = Vec::new();
        registry.for_each_check(&mut |c| names.push(c.name().to_string()));

        assert_eq!(names, vec!["Null pointer", "Other"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.get("Other").is_some());
        assert!(registry.get("Missing").is_none());
    }

    #[test]
    fn test_static_check_templates() {
        let check = null_pointer_check();
        let mut ids = Vec::new();
        check.error_message_templates(&Settings::default(), &mut |r| ids.push(r.id));
        assert_eq!(ids, vec!["nullPointer", "nullPointerDefaultArg"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = CheckRegistry::new();
        let mut visited = 0;
        registry.for_each_check(&mut |_| visited += 1);
        assert_eq!(visited, 0);
        assert!(registry.is_empty());
    }
}

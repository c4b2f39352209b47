//! TeamCity service message formatting.
//!
//! Two message shapes exist:
//! - single value: `##teamcity[messageName 'value']`
//! - multiple attributes: `##teamcity[messageName key1='value1' key2='value2']`
//!
//! Values are always escaped; keys are literal identifiers chosen by the
//! caller and written as-is.

use std::fmt;

use crate::escape::escape;

/// Prefix that marks a line as a TeamCity service message.
pub const PROTOCOL_NAME: &str = "teamcity";

/// Format a single-value service message.
pub fn format_single(name: &str, value: &str) -> String {
    format!("##{}[{} '{}']", PROTOCOL_NAME, name, escape(value))
}

/// Format a multi-attribute service message.
///
/// Attributes are written in iteration order.
pub fn format_multi<I, K, V>(name: &str, values: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = format!("##{}[{}", PROTOCOL_NAME, name);
    for (key, value) in values {
        out.push(' ');
        out.push_str(key.as_ref());
        out.push_str("='");
        out.push_str(&escape(value.as_ref()));
        out.push('\'');
    }
    out.push(']');
    out
}

/// A multi-attribute service message under construction.
///
/// Attributes keep the order in which they were first set. Setting a key
/// again replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMessage {
    name: String,
    attributes: Vec<(String, String)>,
}

impl ServiceMessage {
    /// Start a message with the given name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder form of [`ServiceMessage::set`].
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Render the message as a single protocol line (without newline).
    pub fn render(&self) -> String {
        format_multi(&self.name, self.attributes.iter().map(|(k, v)| (k, v)))
    }
}

impl fmt::Display for ServiceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

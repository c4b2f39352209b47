//! File path handling for emitted inspection locations.
//!
//! TeamCity groups inspections by directory, so every reported file is made
//! portable, relative to the project where possible, and prefixed with `./`.

/// Path operations the resolver depends on.
pub trait PathUtil: Send + Sync {
    /// Convert native separators to `/`.
    fn to_portable(&self, path: &str) -> String;

    /// Whether a portable path is absolute.
    fn is_absolute(&self, path: &str) -> bool;

    /// Rewrite an absolute portable path relative to one of `base_paths`.
    ///
    /// Returns the path unchanged when no base path matches.
    fn relativize(&self, path: &str, base_paths: &[String]) -> String;
}

/// Default [`PathUtil`] working on `/`-separated strings.
///
/// Accepts Unix and Windows style input on every host platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortablePaths;

impl PathUtil for PortablePaths {
    fn to_portable(&self, path: &str) -> String {
        path.replace('\\', "/")
    }

    fn is_absolute(&self, path: &str) -> bool {
        if path.starts_with('/') {
            return true;
        }
        let bytes = path.as_bytes();
        bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
    }

    fn relativize(&self, path: &str, base_paths: &[String]) -> String {
        for base in base_paths {
            let base = self.to_portable(base);
            if base.is_empty() || path == base {
                continue;
            }
            let Some(rest) = path.strip_prefix(base.as_str()) else {
                continue;
            };
            if base.ends_with('/') {
                return rest.to_string();
            }
            if let Some(rest) = rest.strip_prefix('/') {
                return rest.to_string();
            }
        }
        path.to_string()
    }
}

/// Resolve a report's file for emission.
///
/// An empty path stands for a tool-internal error and becomes `<tool_name>`.
/// Everything else is made portable, relativized when absolute, and prefixed
/// with `./` so TeamCity never files it under an empty folder.
pub fn resolve(raw: &str, base_paths: &[String], tool_name: &str, util: &dyn PathUtil) -> String {
    if raw.is_empty() {
        return format!("<{}>", tool_name);
    }
    let mut file = util.to_portable(raw);
    if util.is_absolute(&file) {
        file = util.relativize(&file, base_paths);
    }
    format!("./{}", file)
}

//! TeamCity service message output for static analysis diagnostics.
//!
//! Converts the events of an analysis engine (output text, error reports and
//! progress updates) into TeamCity service messages, one line each:
//!
//! ```text
//! ##teamcity[inspection typeId='nullPointer' message='Null pointer' file='./a.c' line='5' column='2' cwe='476' SEVERITY='ERROR']
//! ```
//!
//! # Architecture
//!
//! - `escape`: service message value escaping
//! - `message`: single-value and multi-attribute message formatting
//! - `severity`: severity classification and its TeamCity labels
//! - `path`: portable, project-relative file locations
//! - `dedup` / `progress`: per-run filters for repeated events
//! - `emitter`: the [`ErrorLogger`] implementation writing to a sink
//! - `shared`: mutex-guarded output for parallel analysis drivers
//! - `catalog`: checks enumerating their diagnostics as inspection types
//! - `settings`: YAML-loadable output settings

pub mod catalog;
pub mod dedup;
pub mod emitter;
pub mod error;
pub mod error_report;
pub mod escape;
pub mod message;
pub mod path;
pub mod progress;
pub mod settings;
pub mod severity;
pub mod shared;

pub use catalog::{Check, CheckCatalog, CheckRegistry, StaticCheck};
pub use emitter::{ErrorLogger, TeamCityOutput};
pub use error::EmitError;
pub use error_report::{ErrorReport, FileLocation};
pub use escape::escape;
pub use message::{format_multi, format_single, ServiceMessage};
pub use path::{PathUtil, PortablePaths};
pub use progress::ProgressEvent;
pub use settings::Settings;
pub use severity::Severity;
pub use shared::SharedOutput;

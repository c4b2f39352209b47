//! TeamCity output for analysis events.
//!
//! [`TeamCityOutput`] receives the engine's output text, error reports and
//! progress updates through the [`ErrorLogger`] trait and writes one service
//! message line per event that survives filtering:
//!
//! - output text is always written as a `message`
//! - progress is written as a `progressMessage` when file or stage changes
//! - error reports are written as an `inspection` the first time they occur
//!
//! See <https://www.jetbrains.com/help/teamcity/service-messages.html>

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::catalog::CheckCatalog;
use crate::dedup::DedupGate;
use crate::error::EmitError;
use crate::error_report::ErrorReport;
use crate::message::{format_single, ServiceMessage};
use crate::path::{self, PathUtil, PortablePaths};
use crate::progress::{ProgressEvent, ProgressTracker};
use crate::settings::Settings;

/// Receiver of analysis engine events.
pub trait ErrorLogger {
    /// Free-text output from the engine.
    fn report_out(&mut self, text: &str) -> Result<(), EmitError>;

    /// A detected issue.
    fn report_err(&mut self, report: &ErrorReport) -> Result<(), EmitError>;

    /// Progress of the analysis through a file.
    fn report_progress(&mut self, event: &ProgressEvent) -> Result<(), EmitError>;
}

/// Writes TeamCity service messages to a sink.
pub struct TeamCityOutput<W: Write> {
    settings: Settings,
    paths: Box<dyn PathUtil>,
    reported: DedupGate,
    progress: ProgressTracker,
    sink: W,
}

impl TeamCityOutput<io::Stdout> {
    /// Output to standard output.
    pub fn stdout(settings: Settings) -> Self {
        Self::new(settings, io::stdout())
    }
}

impl<W: Write> TeamCityOutput<W> {
    pub fn new(settings: Settings, sink: W) -> Self {
        Self {
            settings,
            paths: Box::new(PortablePaths),
            reported: DedupGate::new(),
            progress: ProgressTracker::new(),
            sink,
        }
    }

    /// Replace the path utility used to resolve report locations.
    pub fn with_path_util<P: PathUtil + 'static>(mut self, paths: P) -> Self {
        self.paths = Box::new(paths);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Number of distinct error reports written so far.
    pub fn reported_count(&self) -> usize {
        self.reported.len()
    }

    /// Build the `inspection` message for a report, without deduplication.
    pub fn inspection_message(&self, report: &ErrorReport) -> ServiceMessage {
        let mut msg = ServiceMessage::new("inspection")
            .attr("typeId", &report.id)
            .attr("message", report.message(self.settings.verbose));

        let primary = report.call_stack.first();
        let raw_file = primary.map_or(report.file0.as_str(), |loc| loc.file.as_str());
        msg.set(
            "file",
            path::resolve(
                raw_file,
                &self.settings.base_paths,
                &self.settings.tool_name,
                self.paths.as_ref(),
            ),
        );
        if let Some(loc) = primary {
            msg.set("line", loc.line.to_string());
            msg.set("column", loc.column.to_string());
        }

        if let Some(cwe) = report.cwe.filter(|&id| id != 0) {
            msg.set("cwe", cwe.to_string());
        }
        if report.inconclusive {
            msg.set("inconclusive", "true");
        }
        if let Some(label) = report.severity.teamcity_label() {
            msg.set("SEVERITY", label);
        }
        msg
    }

    /// Write an `inspectionType` message for every diagnostic template in
    /// `catalog`. Returns the number of lines written.
    ///
    /// Templates are not deduplicated against reported errors.
    pub fn report_inspection_types(&mut self, catalog: &dyn CheckCatalog) -> Result<usize, EmitError> {
        let settings = &self.settings;
        let sink = &mut self.sink;
        let mut written = 0usize;
        let mut result: io::Result<()> = Ok(());

        catalog.for_each_check(&mut |check| {
            trace!(check = check.name(), "enumerating inspection types");
            check.error_message_templates(settings, &mut |template| {
                if result.is_err() {
                    return;
                }
                let line = inspection_type_message(&template, settings).render();
                result = writeln!(sink, "{}", line);
                if result.is_ok() {
                    written += 1;
                }
            });
        });

        result?;
        debug!(count = written, "reported inspection types");
        Ok(written)
    }

    fn write_line(&mut self, line: &str) -> Result<(), EmitError> {
        writeln!(self.sink, "{}", line)?;
        Ok(())
    }
}

impl<W: Write> ErrorLogger for TeamCityOutput<W> {
    fn report_out(&mut self, text: &str) -> Result<(), EmitError> {
        self.write_line(&format_single("message", text))
    }

    fn report_err(&mut self, report: &ErrorReport) -> Result<(), EmitError> {
        if !self.reported.admit(report)? {
            debug!(id = %report.id, "skipping duplicate error report");
            return Ok(());
        }
        let line = self.inspection_message(report).render();
        self.write_line(&line)
    }

    fn report_progress(&mut self, event: &ProgressEvent) -> Result<(), EmitError> {
        if !self.progress.admit(event) {
            trace!(file = %event.filename, stage = %event.stage, "progress unchanged");
            return Ok(());
        }
        self.write_line(&format_single("progressMessage", &event.describe()))
    }
}

/// Build the `inspectionType` message describing a diagnostic template.
pub fn inspection_type_message(template: &ErrorReport, settings: &Settings) -> ServiceMessage {
    ServiceMessage::new("inspectionType")
        .attr("id", &template.id)
        .attr("name", &template.id)
        .attr("description", template.message(settings.verbose))
        .attr("category", format!("{} {}", settings.tool_name, template.severity))
}

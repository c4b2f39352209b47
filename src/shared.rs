//! Thread-safe wrapper around [`TeamCityOutput`].
//!
//! One lock guards the reported set, the last progress pair and the sink,
//! so concurrent reporters never emit a report twice or interleave lines.

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::catalog::CheckCatalog;
use crate::emitter::{ErrorLogger, TeamCityOutput};
use crate::error::EmitError;
use crate::error_report::ErrorReport;
use crate::progress::ProgressEvent;

/// [`TeamCityOutput`] that can be shared between analysis threads.
pub struct SharedOutput<W: Write> {
    inner: Mutex<TeamCityOutput<W>>,
}

impl<W: Write> SharedOutput<W> {
    pub fn new(output: TeamCityOutput<W>) -> Self {
        Self {
            inner: Mutex::new(output),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TeamCityOutput<W>>, EmitError> {
        self.inner.lock().map_err(|_| EmitError::Poisoned)
    }

    pub fn report_out(&self, text: &str) -> Result<(), EmitError> {
        self.lock()?.report_out(text)
    }

    pub fn report_err(&self, report: &ErrorReport) -> Result<(), EmitError> {
        self.lock()?.report_err(report)
    }

    pub fn report_progress(&self, event: &ProgressEvent) -> Result<(), EmitError> {
        self.lock()?.report_progress(event)
    }

    pub fn report_inspection_types(&self, catalog: &dyn CheckCatalog) -> Result<usize, EmitError> {
        self.lock()?.report_inspection_types(catalog)
    }

    /// Unwrap the inner output once all reporters are done.
    pub fn into_inner(self) -> Result<TeamCityOutput<W>, EmitError> {
        self.inner.into_inner().map_err(|_| EmitError::Poisoned)
    }
}

impl<W: Write> ErrorLogger for SharedOutput<W> {
    fn report_out(&mut self, text: &str) -> Result<(), EmitError> {
        SharedOutput::report_out(self, text)
    }

    fn report_err(&mut self, report: &ErrorReport) -> Result<(), EmitError> {
        SharedOutput::report_err(self, report)
    }

    fn report_progress(&mut self, event: &ProgressEvent) -> Result<(), EmitError> {
        SharedOutput::report_progress(self, event)
    }
}

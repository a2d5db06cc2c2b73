// src/environment/diagnostics.rs
use crate::error::AppError;

/// Where transport causes are recorded. Users never see these verbatim.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, context: &str, cause: &AppError);
}

/// Default sink: the `log` facade at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnosticSink;

impl DiagnosticSink for LogDiagnosticSink {
    fn record(&self, context: &str, cause: &AppError) {
        log::error!("{}: {}", context, cause);
    }
}

//! Build ledger: diagnostic recording and halt-on-error control flow.
//!
//! One ledger per compile session. Logging entry points record an entry,
//! mirror it into the delta-execution error map when enabled, dispatch a
//! formatted message to the attached sinks, and decide whether the current
//! compilation unit may continue:
//!
//! - [`BuildLedger::log_semantic_error`] always returns `Err(BuildHalt)`;
//! - [`BuildLedger::log_syntax_error`] halts unless a sink marked the
//!   message continuable or no primary sink is attached;
//! - [`BuildLedger::log_warning`] never halts under the standard sinks.
//!
//! The ledger never catches its own halts; the compilation-unit driver does.

use std::io::{self, Write};

use thiserror::Error;

use crate::entry::{ErrorEntry, Location, WarningEntry};
use crate::message::{MessageKind, OutputMessage};
use crate::session::{CompileSession, DeltaEvent, DeltaKind, ErrorMapRecorder};
use crate::sink::{ConsoleSink, HostLogSink, OutputSink};
use crate::warnings::WarningKind;

/// Abrupt end of the current compilation unit.
///
/// Returned, never thrown: callers propagate it with `?` up to the driver
/// that owns the unit. Entries recorded before the halt stay on the ledger.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("{message}")]
pub struct BuildHalt {
    /// Message of the diagnostic that stopped the unit.
    pub message: String,
}

impl BuildHalt {
    pub fn new(message: impl Into<String>) -> Self {
        BuildHalt {
            message: message.into(),
        }
    }
}

impl Default for BuildHalt {
    fn default() -> Self {
        BuildHalt::new("Stopping build")
    }
}

/// Ledger construction failure.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Delta execution needs somewhere to record cross-run error state.
    #[error("delta execution requires an error-map recorder on the session")]
    MissingDeltaRecorder,
}

/// Policy switches for a build ledger.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct LedgerConfig {
    /// A clean-but-warned build counts as failed.
    pub warnings_as_errors: bool,
    /// Reserved: demote errors to warnings. Accepted for configuration
    /// compatibility; no current code path consults it.
    pub errors_as_warnings: bool,
    /// Echo warnings to the echo writer.
    pub log_warnings: bool,
    /// Echo errors to the echo writer.
    pub log_errors: bool,
    /// Echo the summary line from `report_build_result`.
    pub display_build_result: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            warnings_as_errors: false,
            errors_as_warnings: false,
            log_warnings: true,
            log_errors: true,
            display_build_result: true,
        }
    }
}

/// Snapshot of the ledger's tallies.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BuildOutcome {
    /// No errors; under warnings-as-errors, no warnings either.
    pub ok: bool,
    pub error_count: usize,
    pub warning_count: usize,
}

/// Opaque reference to a dependency-graph node.
///
/// Accepted by [`BuildLedger::log_semantic_error`] for dependency-graph
/// bookkeeping by external collaborators; the ledger itself never reads it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GraphNodeRef(pub u32);

/// Diagnostic ledger for one compile session.
///
/// Holds the two append-only entry lists, the policy flags, the attached
/// sinks, and the handles taken over from the session. Entries are removed
/// only by dropping the ledger with the session.
pub struct BuildLedger {
    config: LedgerConfig,
    delta_execution: bool,
    recorder: Option<Box<dyn ErrorMapRecorder>>,
    errors: Vec<ErrorEntry>,
    warnings: Vec<WarningEntry>,
    primary: Option<Box<dyn OutputSink>>,
    secondary: Option<Box<dyn OutputSink>>,
    echo: Box<dyn Write>,
}

impl BuildLedger {
    /// Create a ledger bound to `session`.
    ///
    /// A console sink is installed as the default primary; a host IDE
    /// typically swaps it out. When the session runs under a host runner, a
    /// host-log sink over the session execution log becomes the secondary.
    /// Fails when the session enables delta execution without exposing a
    /// recorder.
    pub fn new(session: CompileSession, config: LedgerConfig) -> Result<Self, LedgerError> {
        let CompileSession {
            options,
            execution_log,
            recorder,
        } = session;

        if options.delta_execution && recorder.is_none() {
            return Err(LedgerError::MissingDeltaRecorder);
        }

        let secondary: Option<Box<dyn OutputSink>> = if options.host_runner {
            Some(Box::new(HostLogSink::new(execution_log)))
        } else {
            None
        };

        Ok(BuildLedger {
            config,
            delta_execution: options.delta_execution,
            recorder,
            errors: Vec::new(),
            warnings: Vec::new(),
            primary: Some(Box::new(ConsoleSink::new())),
            secondary,
            echo: Box::new(io::stdout()),
        })
    }

    /// Swap the primary sink; takes effect for subsequent reports only.
    /// `None` detaches dispatch entirely (syntax errors then cannot halt).
    pub fn set_primary_sink(&mut self, sink: Option<Box<dyn OutputSink>>) {
        self.primary = sink;
    }

    /// Swap the secondary (IDE) sink; takes effect for subsequent reports.
    pub fn set_secondary_sink(&mut self, sink: Option<Box<dyn OutputSink>>) {
        self.secondary = sink;
    }

    /// Route echo lines to an explicit writer instead of standard output.
    pub fn set_echo_writer(&mut self, writer: Box<dyn Write>) {
        self.echo = writer;
    }

    /// Restore echoing to standard output.
    pub fn reset_echo_writer(&mut self) {
        self.echo = Box::new(io::stdout());
    }

    /// Recorded errors, in call order.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// Recorded warnings, in call order.
    pub fn warnings(&self) -> &[WarningEntry] {
        &self.warnings
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Record a syntax error and dispatch it.
    ///
    /// Halts unless a sink marked the message continuable; the standard
    /// sinks never do for error messages, so in practice every syntax error
    /// through them stops the unit. With no primary sink attached, dispatch
    /// is skipped and the report does not halt.
    pub fn log_syntax_error(&mut self, message: &str, location: Location) -> Result<(), BuildHalt> {
        if self.config.log_errors {
            self.echo_line(MessageKind::Error, message, &location);
        }

        self.errors.push(ErrorEntry {
            file_name: location.file.clone(),
            message: message.to_owned(),
            line: location.line,
            col: location.col,
        });
        self.record_delta(DeltaKind::Error, message, &location, None);

        if self.dispatch(MessageKind::Error, message, &location) {
            Ok(())
        } else {
            Err(BuildHalt::new(message))
        }
    }

    /// Record a semantic error and dispatch it. Always halts: semantic
    /// errors are unrecoverable at the point of detection, whatever the
    /// sinks say.
    pub fn log_semantic_error(
        &mut self,
        message: &str,
        location: Location,
        graph_node: Option<GraphNodeRef>,
    ) -> Result<(), BuildHalt> {
        // Carried for collaborators that track the triggering graph node.
        let _ = graph_node;

        if self.config.log_errors {
            self.echo_line(MessageKind::Error, message, &location);
        }

        self.errors.push(ErrorEntry {
            file_name: location.file.clone(),
            message: message.to_owned(),
            line: location.line,
            col: location.col,
        });
        self.record_delta(DeltaKind::Error, message, &location, None);

        let _ = self.dispatch(MessageKind::Error, message, &location);
        Err(BuildHalt::new(message))
    }

    /// Record a warning and dispatch it.
    ///
    /// The halt check is kept for symmetry with the error paths and for
    /// sinks that choose to halt on warnings; the standard sinks mark every
    /// warning continuable, so this normally returns `Ok`.
    pub fn log_warning(
        &mut self,
        kind: WarningKind,
        message: &str,
        location: Location,
    ) -> Result<(), BuildHalt> {
        if self.config.log_warnings {
            self.echo_line(MessageKind::Warning, message, &location);
        }

        self.warnings.push(WarningEntry {
            kind,
            message: message.to_owned(),
            file_name: location.file.clone(),
            line: location.line,
            col: location.col,
        });
        self.record_delta(DeltaKind::Warning, message, &location, Some(kind));

        if self.dispatch(MessageKind::Warning, message, &location) {
            Ok(())
        } else {
            Err(BuildHalt::new(message))
        }
    }

    /// Check whether a warning of `kind` was already recorded this session.
    pub fn contains_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|warning| warning.kind == kind)
    }

    /// Emit the build summary to the echo writer and the attached sinks.
    /// Summary dispatch never affects control flow.
    pub fn report_build_result(&mut self) {
        let summary = format!(
            "========== Build: {} error(s), {} warning(s) ==========",
            self.errors.len(),
            self.warnings.len()
        );

        if self.config.display_build_result {
            let _ = writeln!(self.echo, "{summary}");
        }

        if let Some(primary) = self.primary.as_mut() {
            let mut message = OutputMessage::info(&summary);
            primary.write(&mut message);
            if let Some(secondary) = self.secondary.as_mut() {
                secondary.write(&mut message);
            }
        }
    }

    /// Final build verdict; read-only.
    pub fn build_result(&self) -> BuildOutcome {
        let error_count = self.errors.len();
        let warning_count = self.warnings.len();
        let ok = if self.config.warnings_as_errors {
            error_count == 0 && warning_count == 0
        } else {
            error_count == 0
        };
        BuildOutcome {
            ok,
            error_count,
            warning_count,
        }
    }

    /// Direct formatted echo, independent of sink attachment.
    fn echo_line(&mut self, kind: MessageKind, message: &str, location: &Location) {
        let file = location.file.as_deref().unwrap_or("");
        let _ = writeln!(
            self.echo,
            "{file}({},{}) {kind}:{message}",
            location.line, location.col
        );
    }

    /// Send one message to the primary sink and a path-blanked copy to the
    /// secondary. Returns whether the primary message was marked
    /// continuable; with no primary attached, dispatch is skipped and the
    /// report counts as continuable.
    fn dispatch(&mut self, kind: MessageKind, text: &str, location: &Location) -> bool {
        let Some(primary) = self.primary.as_mut() else {
            return true;
        };

        let mut message = OutputMessage::with_location(
            kind,
            text.trim(),
            location.file.clone(),
            location.line,
            location.col,
        );
        primary.write(&mut message);

        if let Some(secondary) = self.secondary.as_mut() {
            let mut ide_message = message.without_path();
            secondary.write(&mut ide_message);
        }

        message.proceed
    }

    /// Mirror a report into the cross-run error map.
    fn record_delta(
        &mut self,
        kind: DeltaKind,
        message: &str,
        location: &Location,
        warning: Option<WarningKind>,
    ) {
        if !self.delta_execution {
            return;
        }
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record(&DeltaEvent {
                kind,
                message: message.to_owned(),
                file: location.file.clone(),
                line: location.line,
                col: location.col,
                warning,
            });
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

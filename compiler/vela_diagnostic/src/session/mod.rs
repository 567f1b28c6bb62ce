//! Compile-session context injected into the ledger.
//!
//! Everything session-scoped reaches the ledger as an explicit handle: the
//! delta-execution error map is a recorder capability, the host execution
//! log is a shared writer. Nothing here is ambient or process-global.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::warnings::WarningKind;

/// Shared handle to the session execution log.
///
/// Single-threaded by design; the log may be shared between the session and
/// any number of host-log sinks.
pub type SharedLog = Rc<RefCell<dyn Write>>;

/// Behavioral switches for one compile session.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SessionOptions {
    /// Incremental recompilation: reports are mirrored into a cross-run
    /// error map so the next pass can tell persisting errors from fixed
    /// ones. Requires a recorder on the session.
    pub delta_execution: bool,
    /// The session is driven by a host runner that owns an execution log.
    pub host_runner: bool,
}

/// Kind tag for a cross-run error-map event.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeltaKind {
    Error,
    Warning,
}

/// One cross-run error-map event, keyed by `(kind, file, line, col)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeltaEvent {
    pub kind: DeltaKind,
    pub message: String,
    pub file: Option<String>,
    pub line: i32,
    pub col: i32,
    /// Present for warning events only.
    pub warning: Option<WarningKind>,
}

/// Recorder capability for the delta-execution error map.
///
/// The ledger calls this once per recorded diagnostic while delta execution
/// is enabled. Implementations typically key events for comparison against
/// the previous run.
pub trait ErrorMapRecorder {
    fn record(&mut self, event: &DeltaEvent);
}

/// Everything the ledger needs from the owning compile session.
pub struct CompileSession {
    pub options: SessionOptions,
    pub execution_log: Option<SharedLog>,
    pub recorder: Option<Box<dyn ErrorMapRecorder>>,
}

impl CompileSession {
    pub fn new(options: SessionOptions) -> Self {
        CompileSession {
            options,
            execution_log: None,
            recorder: None,
        }
    }

    /// Attach the host execution log.
    #[must_use]
    pub fn with_execution_log(mut self, log: SharedLog) -> Self {
        self.execution_log = Some(log);
        self
    }

    /// Attach the delta-execution recorder.
    #[must_use]
    pub fn with_recorder(mut self, recorder: Box<dyn ErrorMapRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }
}

impl Default for CompileSession {
    fn default() -> Self {
        CompileSession::new(SessionOptions::default())
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;

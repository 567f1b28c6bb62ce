//! Host-log sink.

use crate::message::OutputMessage;
use crate::session::{CompileSession, SharedLog};

use super::{mark_proceed, OutputSink};

/// Sink that routes through the session execution log.
///
/// When the session has no log attached the write is silently dropped; the
/// warning continue-flag is still set so control flow does not depend on
/// log presence.
pub struct HostLogSink {
    log: Option<SharedLog>,
}

impl HostLogSink {
    pub fn new(log: Option<SharedLog>) -> Self {
        HostLogSink { log }
    }

    /// Share the session's execution log, if any.
    pub fn from_session(session: &CompileSession) -> Self {
        HostLogSink {
            log: session.execution_log.clone(),
        }
    }
}

impl OutputSink for HostLogSink {
    fn write(&mut self, message: &mut OutputMessage) {
        if let Some(log) = &self.log {
            let mut log = log.borrow_mut();
            let _ = writeln!(log, "{}", message.format_line());
        }
        mark_proceed(message);
    }
}

//! Output sinks for formatted diagnostic lines.
//!
//! A sink is a small capability the ledger dispatches to; it writes one
//! formatted line per message and flags warnings as continuable. The four
//! standard variants cover:
//!
//! - [`ConsoleSink`]: process standard output
//! - [`FileSink`]: a caller-owned writer
//! - [`TextBufferSink`]: in-memory lines for embedding in a host UI
//! - [`HostLogSink`]: the session execution log, dropped when absent
//!
//! Message history lives in the ledger, not in sinks; only the host-UI
//! variant buffers what it wrote.

mod console;
mod file;
mod host_log;
mod text_buffer;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use host_log::HostLogSink;
pub use text_buffer::TextBufferSink;

use crate::message::{MessageKind, OutputMessage};

/// Destination for formatted diagnostic lines.
pub trait OutputSink {
    /// Write one message. Implementations mark the message continuable
    /// when its kind permits the build to go on (warnings do, errors never
    /// do under the standard variants).
    fn write(&mut self, message: &mut OutputMessage);

    /// Buffered lines, for sinks that retain what they wrote.
    ///
    /// Standard variants return `None`.
    fn messages(&self) -> Option<&[String]> {
        None
    }
}

/// Shared post-write rule: warnings never halt the build.
pub(crate) fn mark_proceed(message: &mut OutputMessage) {
    if message.kind == MessageKind::Warning {
        message.proceed = true;
    }
}

//! Diagnostic recording and reporting for the Vela compiler.
//!
//! The crate has two halves:
//!
//! - [`BuildLedger`] accumulates error and warning entries for one compile
//!   session, enforces the halt-on-error contract, and fans formatted
//!   messages out to the attached sinks.
//! - [`OutputSink`] is the small capability a ledger dispatches to; the four
//!   standard variants cover the console, a caller-owned stream, an
//!   in-memory buffer for host UIs, and the session execution log.
//!
//! # Halt Contract
//!
//! Halting is a value, not unwinding: the logging entry points return
//! `Result<(), BuildHalt>` and the compilation-unit driver decides what to
//! unwind. The contract the sinks and the ledger uphold together:
//!
//! - semantic errors always halt the current unit;
//! - syntax errors halt unless a sink explicitly marks the message
//!   continuable (the standard sinks never do for errors);
//! - warnings never halt under the standard sink set.
//!
//! Recorded entries survive a halt, so a driver that catches the halt can
//! still inspect the full ledger state.

pub mod entry;
pub mod ledger;
pub mod message;
pub mod session;
pub mod sink;
pub mod warnings;

pub use entry::{ErrorEntry, Location, WarningEntry};
pub use ledger::{
    BuildHalt, BuildLedger, BuildOutcome, GraphNodeRef, LedgerConfig, LedgerError,
};
pub use message::{MessageKind, OutputMessage};
pub use session::{
    CompileSession, DeltaEvent, DeltaKind, ErrorMapRecorder, SessionOptions, SharedLog,
};
pub use sink::{ConsoleSink, FileSink, HostLogSink, OutputSink, TextBufferSink};
pub use warnings::WarningKind;

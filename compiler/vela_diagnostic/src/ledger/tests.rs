use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::entry::Location;
use crate::message::{MessageKind, OutputMessage};
use crate::session::{CompileSession, DeltaEvent, DeltaKind, ErrorMapRecorder, SessionOptions};
use crate::sink::{mark_proceed, FileSink, HostLogSink, OutputSink, TextBufferSink};
use crate::warnings::WarningKind;

use super::*;

/// Capturing sink with the standard continue behavior, optionally relaxed
/// to mark error messages continuable (the stub branch of the contract).
struct CaptureSink {
    lines: Rc<RefCell<Vec<String>>>,
    continue_errors: bool,
}

impl CaptureSink {
    fn standard(lines: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
        Box::new(CaptureSink {
            lines: Rc::clone(lines),
            continue_errors: false,
        })
    }

    fn continuing(lines: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
        Box::new(CaptureSink {
            lines: Rc::clone(lines),
            continue_errors: true,
        })
    }
}

impl OutputSink for CaptureSink {
    fn write(&mut self, message: &mut OutputMessage) {
        self.lines.borrow_mut().push(message.format_line());
        mark_proceed(message);
        if self.continue_errors && message.kind == MessageKind::Error {
            message.proceed = true;
        }
    }
}

/// Writer mirroring into a shared buffer, for capturing echo output.
struct SharedWriter(Rc<RefCell<Vec<u8>>>);

impl std::io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

struct VecRecorder {
    events: Rc<RefCell<Vec<DeltaEvent>>>,
}

impl ErrorMapRecorder for VecRecorder {
    fn record(&mut self, event: &DeltaEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Ledger with a capturing primary sink and a capturing echo writer.
fn capturing_ledger(
    config: LedgerConfig,
) -> (BuildLedger, Rc<RefCell<Vec<String>>>, Rc<RefCell<Vec<u8>>>) {
    let mut ledger = BuildLedger::new(CompileSession::default(), config).unwrap();
    let lines = Rc::new(RefCell::new(Vec::new()));
    ledger.set_primary_sink(Some(CaptureSink::standard(&lines)));
    let echo = Rc::new(RefCell::new(Vec::new()));
    ledger.set_echo_writer(Box::new(SharedWriter(Rc::clone(&echo))));
    (ledger, lines, echo)
}

fn echo_text(echo: &Rc<RefCell<Vec<u8>>>) -> String {
    String::from_utf8(echo.borrow().clone()).unwrap()
}

#[test]
fn syntax_error_records_entry_and_dispatches_formatted_line() {
    let (mut ledger, lines, echo) = capturing_ledger(LedgerConfig::default());

    let result = ledger.log_syntax_error("bad token", Location::new("foo.vl", 3, 7));
    assert_eq!(result, Err(BuildHalt::new("bad token")));

    assert_eq!(
        ledger.errors(),
        [ErrorEntry {
            file_name: Some("foo.vl".into()),
            message: "bad token".into(),
            line: 3,
            col: 7,
        }]
    );
    assert_eq!(
        *lines.borrow(),
        ["Error: bad token (foo.vl - line: 3, col: 7)".to_owned()]
    );
    assert_eq!(echo_text(&echo), "foo.vl(3,7) Error:bad token\n");
}

#[test]
fn syntax_error_halts_through_each_standard_sink() {
    let standard_sinks: Vec<Box<dyn OutputSink>> = vec![
        Box::new(FileSink::new(Vec::<u8>::new())),
        Box::new(TextBufferSink::new()),
        Box::new(HostLogSink::new(None)),
    ];
    for sink in standard_sinks {
        let (mut ledger, _, _) = capturing_ledger(LedgerConfig::default());
        ledger.set_primary_sink(Some(sink));
        let result = ledger.log_syntax_error("bad token", Location::unknown());
        assert!(result.is_err());
    }
}

#[test]
fn continuing_stub_suppresses_syntax_halt() {
    let (mut ledger, lines, _) = capturing_ledger(LedgerConfig::default());
    ledger.set_primary_sink(Some(CaptureSink::continuing(&lines)));

    let result = ledger.log_syntax_error("bad token", Location::unknown());
    assert_eq!(result, Ok(()));
    assert_eq!(ledger.error_count(), 1, "entry recorded either way");
}

#[test]
fn semantic_error_always_halts() {
    let (mut ledger, lines, _) = capturing_ledger(LedgerConfig::default());
    ledger.set_primary_sink(Some(CaptureSink::continuing(&lines)));

    let result = ledger.log_semantic_error("type mismatch", Location::unknown(), None);
    assert_eq!(result, Err(BuildHalt::new("type mismatch")));
    assert_eq!(ledger.error_count(), 1);

    // Even with no sink at all, the halt stands.
    ledger.set_primary_sink(None);
    let result =
        ledger.log_semantic_error("second", Location::unknown(), Some(GraphNodeRef(4)));
    assert!(result.is_err());
    assert_eq!(ledger.error_count(), 2);
}

#[test]
fn missing_primary_sink_skips_dispatch_and_halt_for_syntax_errors() {
    let (mut ledger, lines, _) = capturing_ledger(LedgerConfig::default());
    ledger.set_primary_sink(None);

    let result = ledger.log_syntax_error("bad token", Location::unknown());
    assert_eq!(result, Ok(()));
    assert_eq!(ledger.error_count(), 1);
    assert!(lines.borrow().is_empty());
}

#[test]
fn warnings_never_halt_through_standard_sinks() {
    let (mut ledger, lines, _) = capturing_ledger(LedgerConfig::default());

    for n in 0..4 {
        let result = ledger.log_warning(
            WarningKind::UnboundIdentifier,
            &format!("warning {n}"),
            Location::unknown(),
        );
        assert_eq!(result, Ok(()));
    }
    assert_eq!(ledger.warning_count(), 4);
    assert_eq!(lines.borrow().len(), 4);
}

#[test]
fn build_ok_unless_warnings_promoted() {
    let (mut ledger, _, _) = capturing_ledger(LedgerConfig::default());
    assert!(ledger.build_result().ok);

    let _ = ledger.log_warning(WarningKind::Parsing, "w", Location::unknown());
    let outcome = ledger.build_result();
    assert!(outcome.ok);
    assert_eq!(outcome.warning_count, 1);
    assert_eq!(outcome.error_count, 0);

    let (mut strict, _, _) = capturing_ledger(LedgerConfig {
        warnings_as_errors: true,
        ..LedgerConfig::default()
    });
    assert!(strict.build_result().ok, "no warnings yet");
    let _ = strict.log_warning(WarningKind::Parsing, "w", Location::unknown());
    assert!(!strict.build_result().ok);
}

#[test]
fn errors_fail_the_build() {
    let (mut ledger, _, _) = capturing_ledger(LedgerConfig::default());
    let _ = ledger.log_syntax_error("bad token", Location::unknown());
    let outcome = ledger.build_result();
    assert!(!outcome.ok);
    assert_eq!(outcome.error_count, 1);
}

#[test]
fn contains_warning_matches_only_logged_kinds() {
    let (mut ledger, _, _) = capturing_ledger(LedgerConfig::default());
    assert!(!ledger.contains_warning(WarningKind::TypeUndefined));

    let _ = ledger.log_warning(
        WarningKind::TypeUndefined,
        "Type 'Point' is not defined.",
        Location::unknown(),
    );
    assert!(ledger.contains_warning(WarningKind::TypeUndefined));
    assert!(!ledger.contains_warning(WarningKind::FunctionNotFound));
}

#[test]
fn report_build_result_emits_summary_line() {
    let (mut ledger, lines, echo) = capturing_ledger(LedgerConfig::default());
    let _ = ledger.log_syntax_error("bad token", Location::unknown());
    let _ = ledger.log_warning(WarningKind::Parsing, "w1", Location::unknown());
    let _ = ledger.log_warning(WarningKind::Parsing, "w2", Location::unknown());
    lines.borrow_mut().clear();
    echo.borrow_mut().clear();

    ledger.report_build_result();

    assert_eq!(
        *lines.borrow(),
        ["Info: ========== Build: 1 error(s), 2 warning(s) ==========".to_owned()]
    );
    assert_eq!(
        echo_text(&echo),
        "========== Build: 1 error(s), 2 warning(s) ==========\n"
    );
}

#[test]
fn summary_echo_respects_display_flag() {
    let (mut ledger, _, echo) = capturing_ledger(LedgerConfig {
        display_build_result: false,
        ..LedgerConfig::default()
    });
    ledger.report_build_result();
    assert_eq!(echo_text(&echo), "");
}

#[test]
fn secondary_sink_receives_blanked_path() {
    let (mut ledger, primary_lines, _) = capturing_ledger(LedgerConfig::default());
    let secondary_lines = Rc::new(RefCell::new(Vec::new()));
    ledger.set_secondary_sink(Some(CaptureSink::standard(&secondary_lines)));

    let _ = ledger.log_syntax_error("bad token", Location::new("foo.vl", 3, 7));

    assert_eq!(
        *primary_lines.borrow(),
        ["Error: bad token (foo.vl - line: 3, col: 7)".to_owned()]
    );
    assert_eq!(*secondary_lines.borrow(), ["Error: bad token".to_owned()]);
}

#[test]
fn delta_mode_requires_a_recorder() {
    let session = CompileSession::new(SessionOptions {
        delta_execution: true,
        host_runner: false,
    });
    let result = BuildLedger::new(session, LedgerConfig::default());
    assert!(matches!(result, Err(LedgerError::MissingDeltaRecorder)));
}

#[test]
fn delta_mode_forwards_events_to_the_recorder() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let session = CompileSession::new(SessionOptions {
        delta_execution: true,
        host_runner: false,
    })
    .with_recorder(Box::new(VecRecorder {
        events: Rc::clone(&events),
    }));
    let mut ledger = BuildLedger::new(session, LedgerConfig::default()).unwrap();
    let lines = Rc::new(RefCell::new(Vec::new()));
    ledger.set_primary_sink(Some(CaptureSink::standard(&lines)));
    ledger.set_echo_writer(Box::new(SharedWriter(Rc::new(RefCell::new(Vec::new())))));

    let _ = ledger.log_syntax_error("bad token", Location::new("foo.vl", 3, 7));
    let _ = ledger.log_warning(
        WarningKind::UnboundIdentifier,
        "Variable 'x' hasn't been defined yet.",
        Location::new("foo.vl", 4, 1),
    );

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, DeltaKind::Error);
    assert_eq!(events[0].file.as_deref(), Some("foo.vl"));
    assert_eq!(events[0].warning, None);
    assert_eq!(events[1].kind, DeltaKind::Warning);
    assert_eq!(events[1].warning, Some(WarningKind::UnboundIdentifier));
    assert_eq!((events[1].line, events[1].col), (4, 1));
}

#[test]
fn host_runner_session_installs_host_log_secondary() {
    let bytes = Rc::new(RefCell::new(Vec::new()));
    let session = CompileSession::new(SessionOptions {
        delta_execution: false,
        host_runner: true,
    })
    .with_execution_log(Rc::new(RefCell::new(SharedWriter(Rc::clone(&bytes)))));

    let mut ledger = BuildLedger::new(session, LedgerConfig::default()).unwrap();
    let lines = Rc::new(RefCell::new(Vec::new()));
    ledger.set_primary_sink(Some(CaptureSink::standard(&lines)));
    ledger.set_echo_writer(Box::new(SharedWriter(Rc::new(RefCell::new(Vec::new())))));

    let _ = ledger.log_warning(
        WarningKind::Parsing,
        "careful",
        Location::new("foo.vl", 1, 1),
    );

    // The host log received the path-blanked copy.
    assert_eq!(
        String::from_utf8(bytes.borrow().clone()).unwrap(),
        "Warning: careful\n"
    );
}

#[test]
fn echo_is_gated_by_log_flags() {
    let (mut quiet, _, echo) = capturing_ledger(LedgerConfig {
        log_errors: false,
        log_warnings: false,
        ..LedgerConfig::default()
    });
    let _ = quiet.log_syntax_error("bad token", Location::unknown());
    let _ = quiet.log_warning(WarningKind::Parsing, "w", Location::unknown());
    assert_eq!(echo_text(&echo), "");
}

#[test]
fn echo_line_uses_blank_file_when_unknown() {
    let (mut ledger, _, echo) = capturing_ledger(LedgerConfig::default());
    let _ = ledger.log_warning(WarningKind::Parsing, "w", Location::unknown());
    assert_eq!(echo_text(&echo), "(-1,-1) Warning:w\n");
}

#[test]
fn dispatched_text_is_trimmed_but_entries_keep_raw_message() {
    let (mut ledger, lines, _) = capturing_ledger(LedgerConfig::default());
    let result = ledger.log_syntax_error("  bad token \n", Location::unknown());

    assert!(result.is_err());
    assert_eq!(ledger.errors()[0].message, "  bad token \n");
    assert_eq!(*lines.borrow(), ["Error: bad token".to_owned()]);
}

#[test]
fn sink_swap_takes_effect_for_subsequent_reports() {
    let (mut ledger, first, _) = capturing_ledger(LedgerConfig::default());
    let _ = ledger.log_warning(WarningKind::Parsing, "one", Location::unknown());

    let second = Rc::new(RefCell::new(Vec::new()));
    ledger.set_primary_sink(Some(CaptureSink::standard(&second)));
    let _ = ledger.log_warning(WarningKind::Parsing, "two", Location::unknown());

    assert_eq!(*first.borrow(), ["Warning: one".to_owned()]);
    assert_eq!(*second.borrow(), ["Warning: two".to_owned()]);
}

#[test]
fn entries_survive_a_halt_in_call_order() {
    let (mut ledger, _, _) = capturing_ledger(LedgerConfig::default());
    let _ = ledger.log_warning(WarningKind::Parsing, "first", Location::unknown());
    let halted = ledger.log_semantic_error("fatal", Location::unknown(), None);
    assert!(halted.is_err());

    assert_eq!(ledger.warnings()[0].message, "first");
    assert_eq!(ledger.errors()[0].message, "fatal");
}

#[test]
fn build_halt_default_message() {
    assert_eq!(BuildHalt::default().message, "Stopping build");
    assert_eq!(BuildHalt::new("x").to_string(), "x");
}

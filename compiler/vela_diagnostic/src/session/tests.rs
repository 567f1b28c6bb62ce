use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

struct VecRecorder {
    events: Rc<RefCell<Vec<DeltaEvent>>>,
}

impl ErrorMapRecorder for VecRecorder {
    fn record(&mut self, event: &DeltaEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[test]
fn default_session_has_no_handles() {
    let session = CompileSession::default();
    assert!(!session.options.delta_execution);
    assert!(!session.options.host_runner);
    assert!(session.execution_log.is_none());
    assert!(session.recorder.is_none());
}

#[test]
fn builder_attaches_log_and_recorder() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let log: SharedLog = Rc::new(RefCell::new(Vec::<u8>::new()));
    let session = CompileSession::new(SessionOptions {
        delta_execution: true,
        host_runner: true,
    })
    .with_execution_log(Rc::clone(&log))
    .with_recorder(Box::new(VecRecorder {
        events: Rc::clone(&events),
    }));

    assert!(session.execution_log.is_some());

    let mut recorder = session.recorder.expect("recorder attached above");
    recorder.record(&DeltaEvent {
        kind: DeltaKind::Warning,
        message: "w".into(),
        file: Some("a.vl".into()),
        line: 1,
        col: 2,
        warning: Some(crate::warnings::WarningKind::Parsing),
    });
    assert_eq!(events.borrow().len(), 1);
    assert_eq!(events.borrow()[0].kind, DeltaKind::Warning);
}

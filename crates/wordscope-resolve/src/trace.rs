//! Optional tracing of matcher decisions.
//!
//! The matcher itself has no side effects. A [`NameResolver`] reports each
//! decision to its [`TraceSink`], if one is installed; none is by default.
//!
//! [`NameResolver`]: crate::resolver::NameResolver

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::trace;

/// One matcher decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A new candidate was started.
    Start { text: String },
    /// A token was offered to the current candidate.
    FollowUp { text: String, accepted: bool },
    /// A token run was resolved to an identifier.
    Matched { text: String, len: usize, declared: bool },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Start { text } => write!(f, "start {text:?}"),
            TraceEvent::FollowUp { text, accepted } => {
                let verdict = if *accepted { "keep" } else { "stop" };
                write!(f, "  follow {text:?} -> {verdict}")
            }
            TraceEvent::Matched { text, len, declared } => {
                let status = if *declared { "declared" } else { "undeclared" };
                write!(f, "match {text:?} ({len} tokens, {status})")
            }
        }
    }
}

/// Receives matcher decisions.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

impl<F: FnMut(TraceEvent)> TraceSink for F {
    fn record(&mut self, event: TraceEvent) {
        self(event)
    }
}

/// Forwards events to the `log` facade at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, event: TraceEvent) {
        trace!(target: "wordscope::matcher", "{event}");
    }
}

/// Keeps events in memory. Clones share the same buffer, so one clone can be
/// installed in a resolver while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<TraceEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    /// Takes the recorded events, leaving the buffer empty.
    pub fn drain(&self) -> Vec<TraceEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// One line per event.
    pub fn render(&self) -> String {
        self.events
            .borrow()
            .iter()
            .map(|event| format!("{event}\n"))
            .collect()
    }
}

impl TraceSink for RecordingSink {
    fn record(&mut self, event: TraceEvent) {
        self.events.borrow_mut().push(event);
    }
}

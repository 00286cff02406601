//! Out-of-band status notifications a host can receive while a tool runs.
//!
//! The tools only ever see a [`ProgressEmitter`]; hosts that do not care pass
//! [`NoopEmitter`]. Plain closures work too, which is what most embedders use.

use std::sync::Mutex;
use serde::Serialize;

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ProgressEvent {
    Status {
        description: String,
        done: bool,
    },
}

impl ProgressEvent {
    pub fn status(description: impl Into<String>, done: bool) -> Self {
        ProgressEvent::Status {
            description: description.into(),
            done,
        }
    }
}

/// Must return promptly and must not fail; the tool result never depends on it.
pub trait ProgressEmitter: Send + Sync {
    fn emit(&self, event: ProgressEvent);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEmitter;

impl ProgressEmitter for NoopEmitter {
    fn emit(&self, _event: ProgressEvent) {}
}

impl<F> ProgressEmitter for F
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn emit(&self, event: ProgressEvent) {
        self(event)
    }
}

/// Collects every event so it can be returned alongside the tool output.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingEmitter {
    pub fn events(&self) -> Vec<ProgressEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ProgressEmitter for RecordingEmitter {
    fn emit(&self, event: ProgressEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

use std::sync::Mutex;

use crate::ports::ProgressSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Step(String),
    Fail,
    Done,
}

#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn steps(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Step(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl ProgressSink for RecordingProgress {
    fn step(&self, message: &str) {
        self.events.lock().unwrap().push(ProgressEvent::Step(message.to_string()));
    }

    fn fail(&self) {
        self.events.lock().unwrap().push(ProgressEvent::Fail);
    }

    fn done(&self) {
        self.events.lock().unwrap().push(ProgressEvent::Done);
    }
}

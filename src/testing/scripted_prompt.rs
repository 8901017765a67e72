use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use crate::ports::{PromptReader, PromptRequest};

/// Prompt reader that replays canned answers and records what was asked.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<io::Result<String>>>,
    requests: Mutex<Vec<PromptRequest>>,
    announcements: Mutex<Vec<String>>,
    verbatim: bool,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let answers = answers.into_iter().map(|a| Ok(a.into())).collect();
        Self { answers: Mutex::new(answers), ..Self::default() }
    }

    /// Like `new`, but empty answers are returned as-is instead of the
    /// request default, as a terminal that ignores defaults would.
    pub fn verbatim<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { verbatim: true, ..Self::new(answers) }
    }

    /// Prompt reader whose first read fails with `kind`.
    pub fn failing(kind: io::ErrorKind) -> Self {
        let answers = VecDeque::from([Err(io::Error::new(kind, "input stream closed"))]);
        Self { answers: Mutex::new(answers), ..Self::default() }
    }

    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn announcements(&self) -> Vec<String> {
        self.announcements.lock().unwrap().clone()
    }
}

impl PromptReader for ScriptedPrompt {
    fn announce(&self, title: &str, description: Option<&str>) {
        let mut announcements = self.announcements.lock().unwrap();
        announcements.push(title.to_string());
        if let Some(text) = description {
            announcements.push(text.to_string());
        }
    }

    fn read_line(&self, request: &PromptRequest) -> io::Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        let answer = self.answers.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "test: no scripted answer left"))
        })?;
        match (&request.default, answer.is_empty()) {
            (Some(default), true) if !request.masked && !self.verbatim => Ok(default.clone()),
            _ => Ok(answer),
        }
    }
}

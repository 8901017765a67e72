//! Progress sink that writes step status lines to stdout.

use std::cell::RefCell;

use log::info;

use crate::ports::ProgressSink;

/// Prints `• step` when a step begins and `✅`/`❌` when it ends.
#[derive(Debug, Default)]
pub struct TerminalProgress {
    current: RefCell<Option<String>>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish(&self, marker: &str) {
        if let Some(message) = self.current.borrow_mut().take() {
            println!("{} {}", marker, message);
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn step(&self, message: &str) {
        self.finish("✅");
        info!("{}", message);
        println!("• {}", message);
        *self.current.borrow_mut() = Some(message.to_string());
    }

    fn fail(&self) {
        self.finish("❌");
    }

    fn done(&self) {
        self.finish("✅");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_state_is_cleared_when_finished() {
        let progress = TerminalProgress::new();
        progress.step("Creating secret store 'tokens'...");
        assert!(progress.current.borrow().is_some());

        progress.fail();
        assert!(progress.current.borrow().is_none());

        progress.done();
        assert!(progress.current.borrow().is_none());
    }
}

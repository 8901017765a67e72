//! Terminal prompt reader backed by dialoguer.

use std::io;

use dialoguer::{Error as DialoguerError, Input, Password};

use crate::ports::{PromptReader, PromptRequest};

/// Reads operator input from the controlling terminal.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

fn into_io(err: DialoguerError) -> io::Error {
    match err {
        DialoguerError::IO(err) => err,
    }
}

impl PromptReader for DialoguerPrompt {
    fn announce(&self, title: &str, description: Option<&str>) {
        println!();
        println!("{}", title);
        if let Some(text) = description.filter(|text| !text.is_empty()) {
            println!("{}", text);
        }
    }

    fn read_line(&self, request: &PromptRequest) -> io::Result<String> {
        if let Some(text) = request.description.as_deref().filter(|text| !text.is_empty()) {
            println!("{}", text);
        }

        if request.masked {
            return Password::new()
                .with_prompt(&request.label)
                .allow_empty_password(true)
                .interact()
                .map_err(into_io);
        }

        let mut input = Input::<String>::new().with_prompt(&request.label).allow_empty(true);
        if let Some(default) = request.default.as_ref() {
            input = input.default(default.clone()).show_default(true);
        }
        input.interact_text().map_err(into_io)
    }
}

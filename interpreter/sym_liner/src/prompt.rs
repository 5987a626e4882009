//! Interactive prompt source.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::{LineSource, LinerError};

const PROMPT: &str = ">>> ";

/// Line source for interactive sessions.
///
/// `open` prints the banner and sets up the line editor; each `next_line`
/// shows the prompt, records non-empty input in the session history, and
/// maps Ctrl+D to clean end of input.
pub struct PromptLiner {
    editor: Option<DefaultEditor>,
}

impl PromptLiner {
    /// Create a prompt source. The terminal is not touched until `open`.
    pub fn new() -> Self {
        PromptLiner { editor: None }
    }
}

impl Default for PromptLiner {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PromptLiner {
    fn open(&mut self) -> Result<(), LinerError> {
        println!("Sym v{} - Ctrl+D to quit", env!("CARGO_PKG_VERSION"));
        self.editor = Some(DefaultEditor::new()?);
        tracing::debug!("interactive prompt ready");
        Ok(())
    }

    fn next_line(&mut self) -> Result<Option<Vec<u8>>, LinerError> {
        let editor = self.editor.as_mut().ok_or(LinerError::NotOpen)?;
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str()).ok(); // Ignore history errors
                }
                Ok(Some(line.into_bytes()))
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C abandons the current line but not the session.
                println!("^C");
                Ok(Some(Vec::new()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn close(&mut self) -> Result<(), LinerError> {
        self.editor = None;
        Ok(())
    }
}

//! Raw standard-input source.

use std::io::{self, StdinLock};

use crate::{read_line_from, LineSource, LinerError};

/// Line source over piped standard input. No prompt, no banner.
pub struct StdinLiner {
    input: StdinLock<'static>,
}

impl StdinLiner {
    /// Take the stdin lock for the life of this source.
    pub fn new() -> Self {
        StdinLiner {
            input: io::stdin().lock(),
        }
    }
}

impl Default for StdinLiner {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLiner {
    fn open(&mut self) -> Result<(), LinerError> {
        Ok(())
    }

    fn next_line(&mut self) -> Result<Option<Vec<u8>>, LinerError> {
        Ok(read_line_from(&mut self.input)?)
    }

    fn close(&mut self) -> Result<(), LinerError> {
        Ok(())
    }
}

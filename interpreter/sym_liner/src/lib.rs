//! Line sources for the Sym interpreter front end.
//!
//! A [`LineSource`] hands the read loop one line at a time with the
//! terminator stripped; the returned buffer is owned by the caller and
//! dropped when it is done tokenizing. Three sources are provided:
//!
//! - [`PromptLiner`]: interactive sessions -- banner, `>>> ` prompt,
//!   history.
//! - [`StdinLiner`]: piped standard input, no prompt.
//! - [`FileLiner`]: buffered lines from a named file.
//!
//! End of input is `Ok(None)`, never an error; see [`LinerError`] for the
//! failure cases.

use std::io::BufRead;

use thiserror::Error;

mod file;
mod prompt;
mod stdin;

pub use file::FileLiner;
pub use prompt::PromptLiner;
pub use stdin::StdinLiner;

/// Errors a line source can report.
#[derive(Error, Debug)]
pub enum LinerError {
    /// Underlying I/O failure while opening or reading.
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),

    /// The interactive editor failed (terminal setup, read failure).
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// `next_line` was called before `open` (or after `close`).
    #[error("line source is not open")]
    NotOpen,
}

/// A supplier of line buffers for the read loop.
///
/// Lifecycle: `open` once, `next_line` until it returns `Ok(None)`, `close`
/// once. Each returned `Vec<u8>` is one line with the trailing `\n` (and a
/// preceding `\r`, if any) already stripped; ownership transfers to the
/// caller.
pub trait LineSource {
    /// Prepare the source (open the file, print the banner, ...).
    fn open(&mut self) -> Result<(), LinerError>;

    /// Return the next line, or `Ok(None)` at clean end of input.
    fn next_line(&mut self) -> Result<Option<Vec<u8>>, LinerError>;

    /// Release the source.
    fn close(&mut self) -> Result<(), LinerError>;
}

/// Read one terminator-stripped line from a buffered reader.
///
/// Returns `Ok(None)` at end of input. A final line without a terminator
/// is returned as-is.
pub(crate) fn read_line_from<R: BufRead>(reader: &mut R) -> std::io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    strip_line_ending(&mut buf);
    Ok(Some(buf))
}

/// Remove a trailing `\n` and, if present before it, a `\r`.
pub(crate) fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

//! File-backed line source.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::{read_line_from, LineSource, LinerError};

/// Buffered line reader over a named file.
///
/// The file is not opened until [`LineSource::open`]; `next_line` before
/// that reports [`LinerError::NotOpen`].
pub struct FileLiner {
    path: PathBuf,
    reader: Option<BufReader<File>>,
}

impl FileLiner {
    /// Create a source for `path`. The file is opened by `open`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLiner {
            path: path.into(),
            reader: None,
        }
    }

    /// The path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLiner {
    fn open(&mut self) -> Result<(), LinerError> {
        let file = File::open(&self.path)?;
        self.reader = Some(BufReader::new(file));
        tracing::debug!(path = %self.path.display(), "opened source file");
        Ok(())
    }

    fn next_line(&mut self) -> Result<Option<Vec<u8>>, LinerError> {
        let reader = self.reader.as_mut().ok_or(LinerError::NotOpen)?;
        Ok(read_line_from(reader)?)
    }

    fn close(&mut self) -> Result<(), LinerError> {
        self.reader = None;
        tracing::debug!(path = %self.path.display(), "closed source file");
        Ok(())
    }
}

//! A filesystem backed store of notes
//!
//! The [`NoteStore`] is a plain text file holding one note per line, in the
//! order the notes were added. The file is only ever appended to.

use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::domain::Note;

/// An append-only text file of notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStore {
    /// The path of the backing file.
    path: PathBuf,
}

impl NoteStore {
    /// Opens a store at the given path.
    ///
    /// No I/O is performed. The file is created on the first successful
    /// [`append`](Self::append).
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a note to the end of the store.
    ///
    /// The file is created if it does not exist yet. Existing content is never
    /// truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written to.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn append(&self, note: &Note) -> Result<(), AppendError> {
        let mut line = note.to_line();
        line.push('\n');

        self.append_line(&line).map_err(|source| AppendError {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("note appended");
        Ok(())
    }

    fn append_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        // a single write keeps the line whole in append mode
        file.write_all(line.as_bytes())?;
        file.flush()
    }

    /// Read every line of the store, in insertion order.
    ///
    /// Lines are returned exactly as stored, without their line terminators.
    /// Invalid UTF-8 is replaced rather than rejected. Reading never creates
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::NotFound`] if the store has not been created yet,
    /// or [`ReadError::Io`] if it exists but cannot be read.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn read_all(&self) -> Result<Vec<String>, ReadError> {
        let file = File::open(&self.path).map_err(|io_error| match io_error.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound(self.path.clone()),
            _ => ReadError::Io {
                path: self.path.clone(),
                source: io_error,
            },
        })?;

        let lines = BufReader::new(file)
            .split(b'\n')
            .map(|line| line.map(|bytes| decode_line(&bytes)))
            .collect::<io::Result<Vec<_>>>()
            .map_err(|source| ReadError::Io {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(count = lines.len(), "notes read");
        Ok(lines)
    }
}

/// Decode one stored line, dropping a `\r` left by a `\r\n` terminator.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD so a damaged line
/// never hides the rest of the store.
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// An error appending a note to the store.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct AppendError {
    path: PathBuf,
    source: io::Error,
}

impl AppendError {
    /// The path of the store that could not be written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Errors that can occur when reading the store.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The store file does not exist yet.
    #[error("no note store at '{}'", .0.display())]
    NotFound(PathBuf),
    /// The store file exists but could not be read.
    #[error("failed to read note store '{}': {source}", path.display())]
    Io {
        /// The store path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

//! Plain-text Notes Management
//!
//! Notes are single lines of text appended to a plain text file.

pub mod domain;
pub use domain::{Config, ConfigError, Note, NoteError};

/// Filesystem storage for notes.
pub mod storage;
pub use storage::{AppendError, NoteStore, ReadError};

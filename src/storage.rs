mod note_store;

pub use note_store::{AppendError, NoteStore, ReadError};

use std::io::{self, BufRead, Write};

use notes::{NoteStore, ReadError};
use tracing::instrument;

use super::console::Console;

/// Print every note in the store, oldest first.
///
/// A store that is missing or cannot be read is shown as the "no notes yet"
/// state; unreadable stores are logged.
#[instrument(level = "debug", skip_all)]
pub fn run<R: BufRead, W: Write, E: Write>(
    store: &NoteStore,
    console: &mut Console<R, W, E>,
) -> io::Result<()> {
    let theme = console.theme();
    console.say("--- Your Notes ---")?;

    let lines = match store.read_all() {
        Ok(lines) => lines,
        Err(ReadError::NotFound(path)) => {
            tracing::debug!(path = %path.display(), "no note store yet");
            return console.say(theme.dim("(No notes file found. Add your first note!)"));
        }
        Err(error) => {
            tracing::warn!(%error, "failed to read notes");
            return console.say(theme.dim("(No notes file found. Add your first note!)"));
        }
    };

    if lines.is_empty() {
        return console.say(theme.dim("(No notes found. Add one!)"));
    }

    for line in &lines {
        console.say(line)?;
    }
    Ok(())
}

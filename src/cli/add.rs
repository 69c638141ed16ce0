use std::io::{self, BufRead, Write};

use notes::{Note, NoteError, NoteStore};
use tracing::instrument;

use super::console::Console;

/// Ask for one line of text and append it to the store.
///
/// Blank input and write failures are reported to the user. Only console
/// I/O failures are returned.
#[instrument(level = "debug", skip_all)]
pub fn run<R: BufRead, W: Write, E: Write>(
    store: &NoteStore,
    console: &mut Console<R, W, E>,
) -> io::Result<()> {
    let theme = console.theme();
    let input = console
        .prompt("Enter your note (max one line): ")?
        .unwrap_or_default();

    let note = match Note::new(&input) {
        Ok(note) => note,
        Err(NoteError::Empty) => return console.say(theme.warning("Note cannot be empty.")),
        Err(NoteError::MultiLine) => {
            return console.say(theme.warning("Note must fit on a single line."));
        }
    };

    match store.append(&note) {
        Ok(()) => console.say(theme.success("✅ Note saved successfully.")),
        Err(error) => {
            tracing::debug!(path = %error.path().display(), %error, "failed to append note");
            console.complain(theme.failure(&format!(
                "❌ An error occurred while writing the note: {error}"
            )))
        }
    }
}

use std::io::{BufRead, Write};

use notes::NoteStore;
use tracing::instrument;

use super::{
    add,
    console::Console,
    menu::{self, MenuChoice, SEPARATOR},
    view,
};

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Looping,
    Exited,
}

/// The interactive menu loop.
///
/// Runs rounds of menu, selection and action until the user chooses to
/// exit, or until the input is closed.
pub struct Session<R, W, E> {
    store: NoteStore,
    console: Console<R, W, E>,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub const fn new(store: NoteStore, console: Console<R, W, E>) -> Self {
        Self { store, console }
    }

    /// Run the loop to completion.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console itself cannot be read from or
    /// written to. Failures of the note store are reported to the user.
    #[instrument(level = "debug", skip(self), fields(store = %self.store.path().display()))]
    pub fn run(mut self) -> anyhow::Result<()> {
        let mut state = State::Looping;
        while state == State::Looping {
            state = self.round()?;
        }
        tracing::debug!("session finished");
        Ok(())
    }

    fn round(&mut self) -> anyhow::Result<State> {
        menu::render(self.console.output())?;

        let Some(line) = self.console.prompt("Enter your choice: ")? else {
            tracing::info!("input closed, ending session");
            self.console.say("")?;
            return Ok(State::Exited);
        };
        self.console.say(SEPARATOR)?;

        let choice = MenuChoice::parse(&line);
        tracing::debug!(?choice, "menu selection");

        let state = match choice {
            MenuChoice::Add => {
                add::run(&self.store, &mut self.console)?;
                State::Looping
            }
            MenuChoice::View => {
                view::run(&self.store, &mut self.console)?;
                State::Looping
            }
            MenuChoice::Exit => {
                self.console.say("Exiting Notes Manager. Goodbye! 👋")?;
                State::Exited
            }
            MenuChoice::Invalid => {
                let theme = self.console.theme();
                self.console
                    .say(theme.warning("Invalid choice. Please try again."))?;
                State::Looping
            }
        };

        self.console.say(SEPARATOR)?;
        self.console.output().flush()?;
        Ok(state)
    }
}

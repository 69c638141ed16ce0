use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

/// The prefix written in front of every note in the store.
pub const PREFIX: &str = "- ";

/// A single user-authored line of text.
///
/// The text is trimmed of surrounding whitespace on construction, and is
/// guaranteed to be non-empty and free of line breaks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Note(NonEmptyString);

impl Note {
    /// Creates a new `Note` from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if nothing remains after trimming, or
    /// [`Error::MultiLine`] if the trimmed text contains a line break.
    pub fn new(text: impl AsRef<str>) -> Result<Self, Error> {
        let trimmed = text.as_ref().trim();

        if trimmed.contains(['\n', '\r']) {
            return Err(Error::MultiLine);
        }

        NonEmptyString::new(trimmed.to_string())
            .map(Self)
            .map_err(|_| Error::Empty)
    }

    /// Returns the trimmed text of the note.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the note as it is stored on disk, without a line terminator.
    ///
    /// ```
    /// # use notes::Note;
    /// let note = Note::new("  Buy milk ").unwrap();
    /// assert_eq!(note.to_line(), "- Buy milk");
    /// ```
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{PREFIX}{}", self.0)
    }
}

impl TryFrom<String> for Note {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Note {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Note {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Note {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when constructing a [`Note`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The text was empty, or contained only whitespace.
    #[error("note cannot be empty")]
    Empty,
    /// The text spans more than one line.
    #[error("note must fit on a single line")]
    MultiLine,
}

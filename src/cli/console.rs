use std::io::{self, BufRead, Write};

use super::terminal::Theme;

/// The user's side of a session: where input comes from and where output
/// goes.
pub struct Console<R, W, E> {
    input: R,
    output: W,
    errors: E,
    theme: Theme,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub const fn new(input: R, output: W, errors: E, theme: Theme) -> Self {
        Self {
            input,
            output,
            errors,
            theme,
        }
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Print `text` without a newline and wait for one line of input.
    ///
    /// Returns `None` once the input is closed. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    pub fn complain(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.errors, "{}", text.as_ref())?;
        self.errors.flush()
    }

    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_returns_lines_then_none() {
        let mut output = Vec::new();
        let mut console = Console::new(
            "first\nsecond".as_bytes(),
            &mut output,
            io::sink(),
            Theme::plain(),
        );

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first\n"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.prompt("> ").unwrap(), None);
        drop(console);

        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut console = Console::new(
            b"caf\xe9\n".as_slice(),
            io::sink(),
            io::sink(),
            Theme::plain(),
        );

        assert_eq!(
            console.prompt("> ").unwrap().as_deref(),
            Some("caf\u{fffd}\n")
        );
        assert_eq!(console.prompt("> ").unwrap(), None);
    }

    #[test]
    fn complaints_go_to_the_error_stream() {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let mut console = Console::new(io::empty(), &mut output, &mut errors, Theme::plain());

        console.say("fine").unwrap();
        console.complain("broken").unwrap();
        drop(console);

        assert_eq!(output, b"fine\n");
        assert_eq!(errors, b"broken\n");
    }
}

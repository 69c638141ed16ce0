use std::io::{self, Write};

/// Printed after every menu selection and after every action.
pub const SEPARATOR: &str = "-------------------------------------";

/// A selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Interpret a line of user input as a menu selection.
    ///
    /// Anything that is not the number of a menu entry is [`Self::Invalid`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(1) => Self::Add,
            Ok(2) => Self::View,
            Ok(3) => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

pub fn render<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "--- Simple Notes Manager ---")?;
    writeln!(output, "1. Add a Note (Append)")?;
    writeln!(output, "2. View All Notes")?;
    writeln!(output, "3. Exit")
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("1", MenuChoice::Add; "add")]
    #[test_case("2", MenuChoice::View; "view")]
    #[test_case("3", MenuChoice::Exit; "exit")]
    #[test_case(" 2 \n", MenuChoice::View; "surrounding whitespace")]
    #[test_case("+3", MenuChoice::Exit; "explicit sign")]
    #[test_case("03", MenuChoice::Exit; "leading zero")]
    #[test_case("0", MenuChoice::Invalid; "zero")]
    #[test_case("4", MenuChoice::Invalid; "out of range")]
    #[test_case("-1", MenuChoice::Invalid; "negative")]
    #[test_case("abc", MenuChoice::Invalid; "not a number")]
    #[test_case("", MenuChoice::Invalid; "empty")]
    #[test_case("1.0", MenuChoice::Invalid; "decimal")]
    #[test_case("99999999999999999999", MenuChoice::Invalid; "overflow")]
    fn parse(input: &str, expected: MenuChoice) {
        assert_eq!(MenuChoice::parse(input), expected);
    }

    #[test]
    fn menu_lists_three_options() {
        let mut output = Vec::new();
        render(&mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "\n--- Simple Notes Manager ---\n1. Add a Note (Append)\n2. View All Notes\n3. Exit\n"
        );
    }
}

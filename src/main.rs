//! Interactive notes manager.
//!
//! Presents a menu on the terminal for appending notes to a plain text file
//! and listing them back.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}

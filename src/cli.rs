use std::{io, path::PathBuf};

mod add;
mod console;
mod menu;
mod session;
mod terminal;
mod view;

use clap::ArgAction;
use console::Console;
use notes::{Config, NoteStore};
use session::Session;
use terminal::Theme;

#[derive(Debug, clap::Parser)]
#[command(name = "note", version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The path of the note store file [default: notes.txt]
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// A TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.load_config()?;
        let store = NoteStore::new(config.store().to_path_buf());
        tracing::info!(store = %store.path().display(), "starting session");

        let theme = if self.no_color {
            Theme::plain()
        } else {
            Theme::detect()
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        let console = Console::new(stdin.lock(), stdout.lock(), io::stderr(), theme);

        Session::new(store, console).run()
    }

    /// The config file (if any), with `--store` taking precedence.
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = self
            .config
            .as_deref()
            .map(Config::load)
            .transpose()?
            .unwrap_or_default();

        if let Some(store) = &self.store {
            config.set_store(store.clone());
        }

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        // stdout carries the menu, so diagnostics go to stderr
        let filter = tracing_subscriber::EnvFilter::default().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::Path};

    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn command_is_named_after_the_binary() {
        let command = Cli::command();
        command.clone().debug_assert();
        assert_eq!(command.get_name(), "note");
    }

    #[test]
    fn no_arguments_uses_default_store() {
        let cli = Cli::try_parse_from(["note"]).unwrap();

        let config = cli.load_config().unwrap();

        assert_eq!(config.store(), Path::new("notes.txt"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn store_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nstore = \"from-config.txt\"\n")
            .unwrap();
        let config_path = file.path().to_str().unwrap();

        let from_file = Cli::try_parse_from(["note", "--config", config_path]).unwrap();
        assert_eq!(
            from_file.load_config().unwrap().store(),
            Path::new("from-config.txt")
        );

        let overridden =
            Cli::try_parse_from(["note", "-c", config_path, "-s", "override.txt"]).unwrap();
        assert_eq!(
            overridden.load_config().unwrap().store(),
            Path::new("override.txt")
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");
        let missing = missing.to_str().unwrap();

        let cli = Cli::try_parse_from(["note", "--config", missing]).unwrap();

        assert!(cli.load_config().is_err());
    }

    #[test]
    fn verbosity_is_counted() {
        let cli = Cli::try_parse_from(["note", "-vv", "--no-color"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }
}

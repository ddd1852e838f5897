mod app;
mod cli;
mod logging;
mod snapshot;

use clap::Parser;

use crate::app::App;
use crate::cli::{Cli, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = logging::init(cli.verbose) {
        tracing::debug!(path = %path.display(), "logging to file");
    }

    // Config problems are reported before the terminal is taken over
    let config = cli.resolve_config()?;

    match &cli.command {
        Some(Command::Snapshot(args)) => snapshot::run(&config, args),
        None => {
            let terminal = ratatui::init();
            let result = App::new(config).run(terminal);
            ratatui::restore();
            result
        }
    }
}

mod cli;
mod commands;
mod logging;

use cli::Cli;

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    commands::run(&cli)
}

fn main() -> anyhow::Result<()> { run() }

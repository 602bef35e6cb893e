use anyhow::Result;
use lsgmap::{run_all, write_reference, Layout, Stage};

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    let layout = Layout::new(&cli.root);

    let stage = match cli.command {
        Commands::TagDistricts => Stage::TagDistricts,
        Commands::ExtractDistricts => Stage::ExtractDistricts,
        Commands::Simplify => Stage::Simplify,
        Commands::MergeOfficials => Stage::MergeOfficials,
        Commands::SearchIndex => Stage::SearchIndex,
        Commands::Reference => {
            println!("{}", write_reference(&layout)?);
            return Ok(());
        }
        Commands::All => {
            return run_all(&layout, |stage, summary| {
                println!("\n[{}]\n{summary}", stage.name());
            });
        }
    };

    println!("{}", stage.run(&layout)?);
    Ok(())
}

use std::path::PathBuf;

/// Kerala LSG boundary pipeline (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "lsgmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Project root holding data/ and web-app/, defaults to "."
    #[arg(long, global = true, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Resolve the district of every raw LSG boundary
    TagDistricts,

    /// Dissolve tagged LSGs into district boundaries with areas
    ExtractDistricts,

    /// Simplify LSG and district boundaries for the web
    Simplify,

    /// Merge the officials CSV into the LSG boundaries
    MergeOfficials,

    /// Build the client-side search index
    SearchIndex,

    /// Print reference table coverage and write district_mapping.json
    Reference,

    /// Run every data stage in order, stopping at the first failure
    All,
}

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::common::write_json_file;
use crate::config::Layout;
use crate::reference::{ReferenceStats, ReferenceTable};

#[derive(Debug, Clone)]
pub struct ReferenceSummary {
    pub stats: ReferenceStats,
    pub output: PathBuf,
}

/// `reference`: report the compiled-in table and dump its flattened
/// name → district mapping.
pub fn write_reference(layout: &Layout) -> Result<ReferenceSummary> {
    let table = ReferenceTable::kerala();
    let output = layout.district_mapping();
    info!("[reference] writing {} names to {}", table.len(), output.display());
    write_json_file(&output, &table.to_mapping_json())?;
    Ok(ReferenceSummary { stats: table.stats(), output })
}

impl fmt::Display for ReferenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.stats)?;
        write!(f, "\nMapping saved to {}", self.output.display())
    }
}

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::common::{file_size_kb, read_feature_collection, require_file_exists, write_json_file};
use crate::config::Layout;
use crate::search::SearchIndex;

use super::{banner, capitalize, reduction_pct, thousands};

#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub output: PathBuf,
    pub entries: usize,
    pub skipped: usize,
    pub by_type: Vec<(String, usize)>,
    pub by_district: Vec<(String, usize)>,
    pub input_kb: f64,
    pub output_kb: f64,
}

/// `search-index`: flatten the final LSG file into a client-side search index.
pub fn generate_search_index(layout: &Layout) -> Result<SearchSummary> {
    let input = layout.lsg_final();
    require_file_exists(&input, "lsgmap merge-officials first")?;

    info!("[search_index] reading {}", input.display());
    let collection = read_feature_collection(&input)?;

    info!("[search_index] processing {} features", collection.len());
    let index = SearchIndex::build(&collection);
    if index.skipped > 0 {
        warn!("[search_index] {} features without usable geometry were skipped", index.skipped);
    }

    let output = layout.search_index();
    info!("[search_index] writing {}", output.display());
    write_json_file(&output, &index.entries)?;

    Ok(SearchSummary {
        entries: index.len(),
        skipped: index.skipped,
        by_type: owned(index.counts_by_type()),
        by_district: owned(index.counts_by_district()),
        input_kb: file_size_kb(&input)?,
        output_kb: file_size_kb(&output)?,
        output,
    })
}

fn owned(counts: BTreeMap<&str, usize>) -> Vec<(String, usize)> {
    counts.into_iter().map(|(key, count)| (key.to_string(), count)).collect()
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        banner(f, "SEARCH INDEX GENERATED")?;
        writeln!(f, "Total entries: {}", self.entries)?;
        writeln!(f, "Skipped (no geometry): {}", self.skipped)?;

        writeln!(f, "\nEntries by type:")?;
        for (kind, count) in &self.by_type {
            writeln!(f, "  {}: {}", capitalize(kind), count)?;
        }

        writeln!(f, "\nEntries by district:")?;
        for (district, count) in &self.by_district {
            writeln!(f, "  {district}: {count}")?;
        }

        writeln!(f, "\nFile sizes:")?;
        writeln!(f, "  Original GeoJSON: {} KB", thousands(self.input_kb, 2))?;
        writeln!(f, "  Search index: {} KB", thousands(self.output_kb, 2))?;
        writeln!(f, "  Reduction: {:.1}%", reduction_pct(self.input_kb, self.output_kb))?;
        write!(f, "\nSearch index saved to: {}", self.output.display())
    }
}

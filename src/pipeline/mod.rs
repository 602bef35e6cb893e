//! Batch stages. Each reads fixed paths under a [`Layout`], writes its
//! output and returns a summary whose `Display` is the run report.

mod districts;
mod officials;
mod reference;
mod search;
mod simplify;
mod tag;

use std::fmt;

use anyhow::Result;
use tracing::info;

use crate::config::Layout;

pub use districts::{dissolve_districts, extract_districts, DistrictArea, DistrictsSummary};
pub use officials::{merge_officials_data, OfficialsSummary};
pub use reference::{write_reference, ReferenceSummary};
pub use search::{generate_search_index, SearchSummary};
pub use simplify::{simplify_boundaries, simplify_collection, SimplifyCounts, SimplifyJob, SimplifyReport, SimplifySummary};
pub use tag::{tag_collection, tag_districts, TagSummary};

/// The data stages, in the order `all` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    TagDistricts,
    ExtractDistricts,
    Simplify,
    MergeOfficials,
    SearchIndex,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::TagDistricts,
        Stage::ExtractDistricts,
        Stage::Simplify,
        Stage::MergeOfficials,
        Stage::SearchIndex,
    ];

    /// Subcommand name of the stage.
    pub fn name(self) -> &'static str {
        match self {
            Stage::TagDistricts => "tag-districts",
            Stage::ExtractDistricts => "extract-districts",
            Stage::Simplify => "simplify",
            Stage::MergeOfficials => "merge-officials",
            Stage::SearchIndex => "search-index",
        }
    }

    pub fn run(self, layout: &Layout) -> Result<StageSummary> {
        info!("[pipeline] running {}", self.name());
        Ok(match self {
            Stage::TagDistricts => StageSummary::Tag(tag_districts(layout)?),
            Stage::ExtractDistricts => StageSummary::Districts(extract_districts(layout)?),
            Stage::Simplify => StageSummary::Simplify(simplify_boundaries(layout)?),
            Stage::MergeOfficials => StageSummary::Officials(merge_officials_data(layout)?),
            Stage::SearchIndex => StageSummary::Search(generate_search_index(layout)?),
        })
    }
}

/// Summary of any data stage.
#[derive(Debug, Clone)]
pub enum StageSummary {
    Tag(TagSummary),
    Districts(DistrictsSummary),
    Simplify(SimplifySummary),
    Officials(OfficialsSummary),
    Search(SearchSummary),
}

impl fmt::Display for StageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageSummary::Tag(summary) => summary.fmt(f),
            StageSummary::Districts(summary) => summary.fmt(f),
            StageSummary::Simplify(summary) => summary.fmt(f),
            StageSummary::Officials(summary) => summary.fmt(f),
            StageSummary::Search(summary) => summary.fmt(f),
        }
    }
}

/// Run every data stage in order, handing each summary to `report` as soon
/// as the stage finishes. Stops at the first failing stage.
pub fn run_all(layout: &Layout, mut report: impl FnMut(Stage, &StageSummary)) -> Result<()> {
    for stage in Stage::ALL {
        let summary = stage.run(layout)?;
        report(stage, &summary);
    }
    Ok(())
}

const RULE: &str = "============================================================";

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{RULE}")
}

/// Percentage saved going from `before` to `after`; 0 when `before` is 0.
fn reduction_pct(before: f64, after: f64) -> f64 {
    if before > 0.0 { 100.0 * (1.0 - after / before) } else { 0.0 }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Render a number with thousands separators and `decimals` fraction digits.
fn thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac_part) => format!("{sign}{grouped}.{frac_part}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_helpers() {
        assert_eq!(capitalize("gram panchayat"), "Gram panchayat");
        assert_eq!(capitalize(""), "");
        assert_eq!(thousands(38852.456, 2), "38,852.46");
        assert_eq!(thousands(999.0, 0), "999");
        assert_eq!(thousands(1234567.0, 0), "1,234,567");
        assert_eq!(reduction_pct(200.0, 50.0), 75.0);
        assert_eq!(reduction_pct(0.0, 10.0), 0.0);
    }

    #[test]
    fn stage_order() {
        let names: Vec<&str> = Stage::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["tag-districts", "extract-districts", "simplify", "merge-officials", "search-index"]);
    }
}

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::common::{copy_file, read_feature_collection, require_file_exists, write_feature_collection};
use crate::config::Layout;
use crate::error::PipelineError;
use crate::officials::{merge_officials, MergeStats, OfficialsTable};

use super::banner;

const OFFICIALS_CSV_REMEDY: &str =
    "cp data/raw/lsg_officials_template.csv data/raw/lsg_officials.csv and fill in the officials";

#[derive(Debug, Clone)]
pub struct OfficialsSummary {
    pub geojson_input: PathBuf,
    pub csv_input: PathBuf,
    /// The unsimplified LSG file was used because the simplified one is missing.
    pub used_geojson_fallback: bool,
    /// The CSV template was used because the officials CSV is missing.
    pub used_template: bool,
    pub csv_rows: usize,
    pub unique_lsgs: usize,
    pub stats: MergeStats,
    pub output: PathBuf,
    /// Web-app copy target, or the reason the copy failed.
    pub web_copy: Result<PathBuf, String>,
}

/// `merge-officials`: left-join officials CSV rows onto the LSG features
/// and sync the result to the web app.
pub fn merge_officials_data(layout: &Layout) -> Result<OfficialsSummary> {
    let mut geojson_input = layout.lsg_simplified();
    let mut used_geojson_fallback = false;
    if !geojson_input.is_file() {
        let fallback = layout.lsg_with_districts();
        require_file_exists(&fallback, "lsgmap simplify (or lsgmap tag-districts) first")?;
        warn!("[merge_officials] {} not found, using {}", geojson_input.display(), fallback.display());
        geojson_input = fallback;
        used_geojson_fallback = true;
    }

    let mut csv_input = layout.officials_csv();
    let mut used_template = false;
    if !csv_input.is_file() {
        let template = layout.officials_template();
        if !template.is_file() {
            return Err(PipelineError::missing_input(csv_input, OFFICIALS_CSV_REMEDY).into());
        }
        warn!("[merge_officials] using template {}; fill it in as {}", template.display(), csv_input.display());
        csv_input = template;
        used_template = true;
    }

    info!("[merge_officials] reading {}", geojson_input.display());
    let mut collection = read_feature_collection(&geojson_input)?;

    info!("[merge_officials] reading {}", csv_input.display());
    let table = OfficialsTable::read_csv(&csv_input)?;
    info!("[merge_officials] {} records, {} unique LSGs", table.rows(), table.len());

    let stats = merge_officials(&mut collection, &table)?;

    let output = layout.lsg_final();
    info!("[merge_officials] writing {}", output.display());
    write_feature_collection(&output, &collection)?;

    let web_target = layout.web_lsg_final();
    let web_copy = match copy_file(&output, &web_target) {
        Ok(()) => Ok(web_target),
        Err(err) => {
            warn!("[merge_officials] could not sync to web app: {err:#}");
            Err(format!("{err:#}"))
        }
    };

    Ok(OfficialsSummary {
        geojson_input,
        csv_input,
        used_geojson_fallback,
        used_template,
        csv_rows: table.rows(),
        unique_lsgs: table.len(),
        stats,
        output,
        web_copy,
    })
}

impl fmt::Display for OfficialsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.used_geojson_fallback {
            writeln!(f, "Note: using fallback input {}", self.geojson_input.display())?;
        }
        if self.used_template {
            writeln!(f, "Note: using template file {} as officials data", self.csv_input.display())?;
        }

        banner(f, "OFFICIALS DATA MERGE COMPLETE")?;
        writeln!(f, "Total LSGs in GeoJSON: {}", self.stats.total)?;
        writeln!(f, "Officials records in CSV: {} ({} rows)", self.unique_lsgs, self.csv_rows)?;
        writeln!(f, "Matched LSGs: {}", self.stats.matched)?;
        writeln!(f, "LSGs with actual data: {}", self.stats.with_data)?;
        writeln!(f, "Coverage: {:.1}%", self.stats.coverage())?;

        let unmatched = self.stats.total - self.stats.matched;
        if unmatched > 0 {
            writeln!(f, "\nNote: {unmatched} LSGs don't have officials data yet")?;
        }

        write!(f, "\nMerged data saved to: {}", self.output.display())?;
        match &self.web_copy {
            Ok(target) => write!(f, "\nSynced to web app: {}", target.display()),
            Err(reason) => write!(f, "\nWarning: could not sync to web app: {reason}"),
        }
    }
}

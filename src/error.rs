use std::path::PathBuf;

use thiserror::Error;

/// Fatal pipeline failures. Unresolved names and repaired geometries are not
/// errors; they are counted in the stage summaries instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input file not found: {}\nPlease run {remedy}", path.display())]
    MissingInputFile { path: PathBuf, remedy: &'static str },

    #[error("'district' field not found in {}\nPlease run lsgmap tag-districts first", path.display())]
    MissingDistrictField { path: PathBuf },

    #[error("failed to read CSV {}: {reason}", path.display())]
    MalformedCsv { path: PathBuf, reason: String },

    #[error("invalid GeoJSON in {}: {reason}", path.display())]
    MalformedGeoJson { path: PathBuf, reason: String },
}

impl PipelineError {
    pub fn missing_input(path: impl Into<PathBuf>, remedy: &'static str) -> Self {
        Self::MissingInputFile { path: path.into(), remedy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_names_path_and_remedy() {
        let err = PipelineError::missing_input("data/raw/x.geojson", "setup.sh to download the data");
        let msg = err.to_string();
        assert!(msg.contains("data/raw/x.geojson"));
        assert!(msg.contains("Please run setup.sh"));
    }
}

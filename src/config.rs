use std::path::{Path, PathBuf};

/// Sentinel district for features the resolver could not place.
pub const UNKNOWN_DISTRICT: &str = "Unknown";

/// LSG boundaries keep detail down to roughly 111 m.
pub const LSG_TOLERANCE: f64 = 0.001;

/// District boundaries can be coarser (roughly 555 m).
pub const DISTRICT_TOLERANCE: f64 = 0.005;

/// Metres per degree of latitude, used only for human-readable tolerance output.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// WGS 84 / UTM zone 43N (EPSG:32643), the metric CRS covering Kerala.
pub const AREA_PROJ4: &str = "+proj=utm +zone=43 +datum=WGS84 +units=m +no_defs +type=crs";

/// File layout of a pipeline checkout. Every stage reads and writes fixed
/// paths relative to `root`.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline] pub fn root(&self) -> &Path { &self.root }

    #[inline] fn path(&self, relative: &str) -> PathBuf { self.root.join(relative) }

    /// Raw LSG boundaries as downloaded by `setup.sh`.
    pub fn raw_lsg(&self) -> PathBuf { self.path("data/raw/kerala_lsg_data.geojson") }

    pub fn lsg_with_districts(&self) -> PathBuf { self.path("data/processed/kerala_lsg_with_districts.geojson") }

    pub fn districts(&self) -> PathBuf { self.path("data/processed/kerala_districts.geojson") }

    pub fn lsg_simplified(&self) -> PathBuf { self.path("data/processed/kerala_lsg_simplified.geojson") }

    pub fn districts_simplified(&self) -> PathBuf { self.path("data/processed/kerala_districts_simplified.geojson") }

    pub fn officials_csv(&self) -> PathBuf { self.path("data/raw/lsg_officials.csv") }

    pub fn officials_template(&self) -> PathBuf { self.path("data/raw/lsg_officials_template.csv") }

    pub fn lsg_final(&self) -> PathBuf { self.path("data/processed/kerala_lsg_final.geojson") }

    /// Copy of the final LSG file served by the web app.
    pub fn web_lsg_final(&self) -> PathBuf { self.path("web-app/static/data/kerala_lsg_final.geojson") }

    pub fn search_index(&self) -> PathBuf { self.path("data/processed/search_index.json") }

    pub fn district_mapping(&self) -> PathBuf { self.path("district_mapping.json") }
}

impl Default for Layout {
    fn default() -> Self { Self::new(".") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_relative_to_root() {
        let layout = Layout::new("/tmp/kerala");
        assert_eq!(layout.raw_lsg(), Path::new("/tmp/kerala/data/raw/kerala_lsg_data.geojson"));
        assert_eq!(layout.search_index(), Path::new("/tmp/kerala/data/processed/search_index.json"));
    }
}

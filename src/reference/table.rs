use std::fmt;

use ahash::AHashMap;
use serde_json::{Map, Value};

use super::{kerala::KERALA_DISTRICTS, DistrictLsgs};

/// Category an LSG is listed under in the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LsgCategory {
    Corporation,
    Municipality,
    BlockPanchayat,
    GramPanchayat,
}

/// One authored name and the district it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub name: String,
    pub district: String,
    pub category: LsgCategory,
}

impl ReferenceEntry {
    pub fn new(name: impl Into<String>, district: impl Into<String>, category: LsgCategory) -> Self {
        Self { name: name.into(), district: district.into(), category }
    }
}

/// Immutable name → district lookup, flattened from the district table.
///
/// Entries keep their authored order. When a name is listed twice the later
/// listing decides its district.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
    lookup: AHashMap<String, usize>,
}

impl ReferenceTable {
    /// Build the table for Kerala's 14 districts.
    pub fn kerala() -> Self {
        Self::from_districts(KERALA_DISTRICTS)
    }

    pub fn from_districts(districts: &[DistrictLsgs]) -> Self {
        Self::from_entries(districts.iter().flat_map(|d| {
            d.iter().map(|(category, name)| ReferenceEntry::new(name, d.district, category))
        }))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ReferenceEntry>) -> Self {
        let entries = entries.into_iter().collect::<Vec<_>>();
        let mut lookup = AHashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            lookup.insert(entry.name.clone(), i);
        }
        Self { entries, lookup }
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[inline] pub fn entries(&self) -> &[ReferenceEntry] { &self.entries }

    /// Exact, case-sensitive lookup of an authored name.
    pub fn district_of(&self, name: &str) -> Option<&str> {
        self.lookup.get(name).map(|&i| self.entries[i].district.as_str())
    }

    /// Count districts and entries per category.
    pub fn stats(&self) -> ReferenceStats {
        let mut districts: Vec<&str> = Vec::new();
        let mut stats = ReferenceStats::default();
        for entry in &self.entries {
            if !districts.contains(&entry.district.as_str()) {
                districts.push(&entry.district);
            }
            match entry.category {
                LsgCategory::Corporation => stats.corporations += 1,
                LsgCategory::Municipality => stats.municipalities += 1,
                LsgCategory::BlockPanchayat => stats.block_panchayats += 1,
                LsgCategory::GramPanchayat => stats.gram_panchayats += 1,
            }
        }
        stats.districts = districts.len();
        stats
    }

    /// Flattened mapping as a JSON object, in first-listed key order.
    pub fn to_mapping_json(&self) -> Value {
        let mut mapping = Map::new();
        for entry in &self.entries {
            mapping.insert(entry.name.clone(), Value::String(entry.district.clone()));
        }
        Value::Object(mapping)
    }
}

/// Administrative coverage of the reference table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReferenceStats {
    pub districts: usize,
    pub corporations: usize,
    pub municipalities: usize,
    pub block_panchayats: usize,
    pub gram_panchayats: usize,
}

impl ReferenceStats {
    #[inline]
    pub fn total_mapped(&self) -> usize {
        self.corporations + self.municipalities + self.block_panchayats + self.gram_panchayats
    }
}

impl fmt::Display for ReferenceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Kerala Administrative Structure:")?;
        writeln!(f, "  Districts: {}", self.districts)?;
        writeln!(f, "  Corporations: {}", self.corporations)?;
        writeln!(f, "  Municipalities: {}", self.municipalities)?;
        writeln!(f, "  Block Panchayats: {}", self.block_panchayats)?;
        writeln!(f, "  Grama Panchayats: {}", self.gram_panchayats)?;
        write!(f, "  Total LSGs Mapped: {}", self.total_mapped())
    }
}

//! Officials CSV and its left join onto LSG features.

use std::path::Path;

use ahash::AHashMap;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::common::{read_csv_strings, string_rows};
use crate::feature::FeatureCollection;
use crate::resolve::{normalize_name, SuffixPolicy};

/// Recognized CSV columns, in record field order.
pub const OFFICIALS_COLUMNS: [&str; 13] = [
    "lsg_name",
    "president_name",
    "president_party",
    "president_contact",
    "president_email",
    "secretary_name",
    "secretary_contact",
    "secretary_email",
    "office_address",
    "website",
    "mla_constituency",
    "mp_constituency",
    "notes",
];

/// One row of the officials CSV. Missing cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfficialsRecord {
    pub lsg_name: String,
    pub president_name: String,
    pub president_party: String,
    pub president_contact: String,
    pub president_email: String,
    pub secretary_name: String,
    pub secretary_contact: String,
    pub secretary_email: String,
    pub office_address: String,
    pub website: String,
    pub mla_constituency: String,
    pub mp_constituency: String,
    pub notes: String,
}

impl OfficialsRecord {
    /// Build a record from cells ordered as [`OFFICIALS_COLUMNS`].
    pub fn from_row(row: Vec<String>) -> Self {
        let mut cells = row.into_iter();
        let mut next = || cells.next().unwrap_or_default();
        Self {
            lsg_name: next(),
            president_name: next(),
            president_party: next(),
            president_contact: next(),
            president_email: next(),
            secretary_name: next(),
            secretary_contact: next(),
            secretary_email: next(),
            office_address: next(),
            website: next(),
            mla_constituency: next(),
            mp_constituency: next(),
            notes: next(),
        }
    }

    /// Whether the row carries anything beyond its key.
    pub fn has_data(&self) -> bool {
        [&self.president_name, &self.secretary_name, &self.office_address, &self.website]
            .iter()
            .any(|field| !field.is_empty())
    }

    pub fn officials(&self) -> Officials {
        Officials {
            president: President {
                name: self.president_name.clone(),
                party: self.president_party.clone(),
                contact: self.president_contact.clone(),
                email: self.president_email.clone(),
            },
            secretary: Secretary {
                name: self.secretary_name.clone(),
                contact: self.secretary_contact.clone(),
                email: self.secretary_email.clone(),
            },
        }
    }

    /// Flat properties copied onto the feature when non-empty.
    fn flat_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("office_address", &self.office_address),
            ("website", &self.website),
            ("mla_constituency", &self.mla_constituency),
            ("mp_constituency", &self.mp_constituency),
            ("notes", &self.notes),
        ]
    }
}

/// The `officials` property of a merged feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Officials {
    pub president: President,
    pub secretary: Secretary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct President {
    pub name: String,
    pub party: String,
    pub contact: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Secretary {
    pub name: String,
    pub contact: String,
    pub email: String,
}

/// Officials rows keyed by single-strip normalized LSG name.
#[derive(Debug, Clone, Default)]
pub struct OfficialsTable {
    by_name: AHashMap<String, OfficialsRecord>,
    rows: usize,
}

impl OfficialsTable {
    /// Index records by normalized name. Rows without a name are ignored and
    /// a later row replaces an earlier one with the same key.
    pub fn from_records(records: impl IntoIterator<Item = OfficialsRecord>) -> Self {
        let mut table = Self::default();
        for record in records {
            table.rows += 1;
            if record.lsg_name.is_empty() { continue }
            let key = normalize_name(&record.lsg_name, SuffixPolicy::SingleStrip);
            table.by_name.insert(key, record);
        }
        table
    }

    pub fn read_csv(path: &Path) -> Result<Self> {
        let df = read_csv_strings(path)?;
        let rows = string_rows(&df, &OFFICIALS_COLUMNS)?;
        Ok(Self::from_records(rows.into_iter().map(OfficialsRecord::from_row)))
    }

    /// Number of CSV rows read, including ignored ones.
    #[inline] pub fn rows(&self) -> usize { self.rows }

    /// Number of distinct LSG keys.
    #[inline] pub fn len(&self) -> usize { self.by_name.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.by_name.is_empty() }

    /// Look up the record for a feature name.
    pub fn get(&self, name: &str) -> Option<&OfficialsRecord> {
        self.by_name.get(&normalize_name(name, SuffixPolicy::SingleStrip))
    }
}

/// Join coverage for one merge run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub total: usize,
    pub matched: usize,
    pub with_data: usize,
}

impl MergeStats {
    /// Percentage of features whose officials row carries data.
    pub fn coverage(&self) -> f64 {
        if self.total == 0 { 0.0 } else { 100.0 * self.with_data as f64 / self.total as f64 }
    }
}

/// Attach officials to every feature whose name joins a CSV row.
pub fn merge_officials(collection: &mut FeatureCollection, table: &OfficialsTable) -> Result<MergeStats> {
    let mut stats = MergeStats { total: collection.len(), ..MergeStats::default() };

    for feature in &mut collection.features {
        let name = feature.property_str("name").unwrap_or_default();
        let Some(record) = table.get(name) else { continue };
        debug!("officials matched for {:?}", name);

        stats.matched += 1;
        if record.has_data() {
            stats.with_data += 1;
        }

        feature.set_property("officials", serde_json::to_value(record.officials())?);
        for (key, value) in record.flat_fields() {
            if !value.is_empty() {
                feature.set_property(key, Value::String(value.to_string()));
            }
        }
    }

    Ok(stats)
}

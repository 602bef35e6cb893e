mod kerala;
mod table;

pub use table::{LsgCategory, ReferenceEntry, ReferenceStats, ReferenceTable};

/// The LSG names of one district, grouped by category, in authored order.
#[derive(Debug, Clone, Copy)]
pub struct DistrictLsgs {
    pub district: &'static str,
    pub corporations: &'static [&'static str],
    pub municipalities: &'static [&'static str],
    pub block_panchayats: &'static [&'static str],
    pub gram_panchayats: &'static [&'static str],
}

impl DistrictLsgs {
    /// Iterate `(category, name)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (LsgCategory, &'static str)> + '_ {
        let group = |category: LsgCategory, names: &'static [&'static str]| {
            names.iter().map(move |&name| (category, name))
        };
        group(LsgCategory::Corporation, self.corporations)
            .chain(group(LsgCategory::Municipality, self.municipalities))
            .chain(group(LsgCategory::BlockPanchayat, self.block_panchayats))
            .chain(group(LsgCategory::GramPanchayat, self.gram_panchayats))
    }
}

use std::fmt;

use serde::Serialize;

/// Tier of a Local Self-Government body, as written to `lsg_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LsgType {
    #[serde(rename = "gram panchayat")]
    GramPanchayat,
    #[serde(rename = "municipal corporation")]
    MunicipalCorporation,
    #[serde(rename = "municipality")]
    Municipality,
    #[serde(rename = "unknown")]
    Unknown,
}

impl LsgType {
    pub const ALL: [LsgType; 4] = [
        LsgType::GramPanchayat,
        LsgType::MunicipalCorporation,
        LsgType::Municipality,
        LsgType::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LsgType::MunicipalCorporation => "municipal corporation",
            LsgType::Municipality => "municipality",
            LsgType::GramPanchayat => "gram panchayat",
            LsgType::Unknown => "unknown",
        }
    }

    /// Parse an `lsg_type` property value.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == label)
    }

    /// Infer the tier from the `local_auth` tag, the raw name and the admin level.
    ///
    /// An exact `local_auth` tag decides first. Otherwise the lower-cased name
    /// is searched for `corporation`, `municipality` and `panchayat(h)` in
    /// that order, and only then does the admin level break the tie.
    pub fn infer(name: &str, local_auth: Option<&str>, admin_level: Option<&str>) -> Self {
        let local_auth = local_auth.map(str::to_lowercase);
        match local_auth.as_deref() {
            Some("municipal_corporation") => return LsgType::MunicipalCorporation,
            Some("municipality") => return LsgType::Municipality,
            Some("gram_panchayat") => return LsgType::GramPanchayat,
            _ => {}
        }

        let name = name.to_lowercase();
        if name.contains("corporation") {
            LsgType::MunicipalCorporation
        } else if name.contains("municipality") {
            LsgType::Municipality
        } else if name.contains("panchayat") || name.contains("panchayath") {
            LsgType::GramPanchayat
        } else {
            match admin_level {
                Some("4") => LsgType::Municipality,
                Some("8") => LsgType::GramPanchayat,
                _ => LsgType::Unknown,
            }
        }
    }

    /// Corporations are headed by a mayor rather than a president.
    #[inline]
    pub fn head_title(self) -> &'static str {
        match self {
            LsgType::MunicipalCorporation => "Mayor",
            _ => "President",
        }
    }
}

impl fmt::Display for LsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_auth_takes_priority() {
        assert_eq!(LsgType::infer("Kochi Corporation", Some("municipality"), None), LsgType::Municipality);
        assert_eq!(LsgType::infer("Aluva", Some("GRAM_PANCHAYAT"), Some("4")), LsgType::GramPanchayat);
    }

    #[test]
    fn name_substrings_in_order() {
        assert_eq!(LsgType::infer("Kochi Corporation", None, None), LsgType::MunicipalCorporation);
        assert_eq!(LsgType::infer("Aluva Municipality", Some(""), None), LsgType::Municipality);
        assert_eq!(LsgType::infer("Agali Gramapanchayath", None, None), LsgType::GramPanchayat);
        assert_eq!(LsgType::infer("Corporation Municipality", None, None), LsgType::MunicipalCorporation);
    }

    #[test]
    fn admin_level_is_last_resort() {
        assert_eq!(LsgType::infer("Aluva", None, Some("4")), LsgType::Municipality);
        assert_eq!(LsgType::infer("Agali", None, Some("8")), LsgType::GramPanchayat);
        assert_eq!(LsgType::infer("Agali", None, Some("6")), LsgType::Unknown);
        assert_eq!(LsgType::infer("Aluva Municipality", None, Some("8")), LsgType::Municipality);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&LsgType::MunicipalCorporation).unwrap(), "\"municipal corporation\"");
        assert_eq!(LsgType::GramPanchayat.to_string(), "gram panchayat");
        assert_eq!(LsgType::from_label("municipality"), Some(LsgType::Municipality));
        assert_eq!(LsgType::from_label("lsg"), None);
    }
}

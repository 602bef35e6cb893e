//! LSG name normalization.
//!
//! District tagging strips suffixes repeatedly and title-cases the result.
//! The officials merge strips a single suffix and leaves the name lower-case.

/// How many administrative suffixes to strip, and how to case the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixPolicy {
    /// Strip at most one suffix; the result stays lower-case.
    SingleStrip,
    /// Strip suffixes until none remain, then title-case.
    Recursive,
}

/// Suffix order used by [`SuffixPolicy::SingleStrip`].
const SINGLE_STRIP_SUFFIXES: &[&str] = &[
    " municipal corporation",
    " corporation",
    " municipality",
    " grama panchayat",
    " grama panchayath",
    " gramapanchayat",
    " gramapanchayath",
    " block panchayat",
    " district panchayat",
    " panchayath",
    " panchayat",
];

/// Suffix order used by [`SuffixPolicy::Recursive`].
const RECURSIVE_SUFFIXES: &[&str] = &[
    " municipal corporation",
    " grama panchayath",
    " grama panchayat",
    " gramapanchayath",
    " gramapanchayat",
    " block panchayat",
    " district panchayat",
    " corporation",
    " municipality",
    " panchayath",
    " panchayat",
];

impl SuffixPolicy {
    /// Ordered suffix table; longer suffixes come before the ones they contain.
    #[inline]
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            SuffixPolicy::SingleStrip => SINGLE_STRIP_SUFFIXES,
            SuffixPolicy::Recursive => RECURSIVE_SUFFIXES,
        }
    }
}

/// Strip the first matching suffix from an already lower-cased, trimmed name.
/// Returns `None` when no suffix matches.
pub fn strip_suffix(name: &str, policy: SuffixPolicy) -> Option<&str> {
    policy.suffixes().iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .map(str::trim)
}

/// Normalize a raw LSG name into a comparable key under `policy`.
pub fn normalize_name(name: &str, policy: SuffixPolicy) -> String {
    let lowered = name.trim().to_lowercase();
    if lowered.is_empty() {
        return String::new();
    }

    match policy {
        SuffixPolicy::SingleStrip => strip_suffix(&lowered, policy)
            .unwrap_or(&lowered)
            .to_string(),
        SuffixPolicy::Recursive => {
            let mut current = lowered.as_str();
            while let Some(stripped) = strip_suffix(current, policy) {
                current = stripped;
            }
            title_case(current)
        }
    }
}

/// Upper-case every cased letter that follows an uncased character,
/// lower-case the rest. Uncased letters (Malayalam script) count as
/// word breaks.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_cased = false;
    for c in s.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if prev_is_cased { out.extend(c.to_lowercase()) } else { out.extend(c.to_uppercase()) }
            prev_is_cased = true;
        } else {
            out.push(c);
            prev_is_cased = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_suffix_is_tried_first() {
        assert_eq!(
            normalize_name("Thiruvananthapuram Municipal Corporation", SuffixPolicy::SingleStrip),
            "thiruvananthapuram",
        );
        assert_eq!(
            normalize_name("Thiruvananthapuram Municipal Corporation", SuffixPolicy::Recursive),
            "Thiruvananthapuram",
        );
    }

    #[test]
    fn single_strip_removes_one_suffix() {
        assert_eq!(normalize_name("Agali Grama Panchayat Panchayat", SuffixPolicy::SingleStrip), "agali grama panchayat");
        assert_eq!(normalize_name("  Kochi Corporation ", SuffixPolicy::SingleStrip), "kochi");
        assert_eq!(normalize_name("Aluva", SuffixPolicy::SingleStrip), "aluva");
    }

    #[test]
    fn recursive_strips_stacked_suffixes() {
        assert_eq!(normalize_name("Agali Grama Panchayat Panchayat", SuffixPolicy::Recursive), "Agali");
        assert_eq!(normalize_name("Agali Gramapanchayath", SuffixPolicy::Recursive), "Agali");
        assert_eq!(normalize_name("Kunnathunad Block Panchayat", SuffixPolicy::Recursive), "Kunnathunad");
    }

    #[test]
    fn recursive_is_idempotent() {
        for raw in ["Chittur-Thathamangalam Municipality", "Kochi Corporation", "north paravur", "Sulthan Bathery"] {
            let once = normalize_name(raw, SuffixPolicy::Recursive);
            assert_eq!(normalize_name(&once, SuffixPolicy::Recursive), once);
        }
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(normalize_name("", SuffixPolicy::Recursive), "");
        assert_eq!(normalize_name("   ", SuffixPolicy::SingleStrip), "");
    }

    #[test]
    fn suffix_needs_leading_space() {
        assert_eq!(normalize_name("Panchayat", SuffixPolicy::SingleStrip), "panchayat");
        assert_eq!(strip_suffix("corporation", SuffixPolicy::Recursive), None);
    }

    #[test]
    fn title_case_follows_word_boundaries() {
        assert_eq!(title_case("chittur-thathamangalam"), "Chittur-Thathamangalam");
        assert_eq!(title_case("NORTH paravur"), "North Paravur");
        assert_eq!(title_case("o'neil 2nd"), "O'Neil 2Nd");
    }

    #[test]
    fn uncased_letters_break_words() {
        assert_eq!(title_case("കൊച്ചിkochi"), "കൊച്ചിKochi");
        assert_eq!(title_case("ALUVA കൊച്ചി EAST"), "Aluva കൊച്ചി East");
    }
}

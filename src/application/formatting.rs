// Number formatting and country name ordering
use crate::domain::covid::CountryEntry;
use num_format::{Locale, ToFormattedString};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn format_count(value: u64, locale: &Locale) -> String {
    value.to_formatted_string(locale)
}

/// Primary collation key: accents stripped and case folded, so "Côte d'Ivoire"
/// sorts between "Costa Rica" and "Croatia".
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Stable sort by display name; entries with identical names keep their order.
pub fn sort_by_display_name(entries: &mut [CountryEntry]) {
    entries.sort_by(|a, b| compare_names(&a.display_name, &b.display_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[CountryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.display_name.as_str()).collect()
    }

    #[test]
    fn test_format_count_en() {
        assert_eq!(format_count(0, &Locale::en), "0");
        assert_eq!(format_count(999, &Locale::en), "999");
        assert_eq!(format_count(1_234_567, &Locale::en), "1,234,567");
    }

    #[test]
    fn test_format_count_de() {
        assert_eq!(format_count(1_234_567, &Locale::de), "1.234.567");
    }

    #[test]
    fn test_sorts_alphabetically() {
        let mut entries = vec![
            CountryEntry::new("Zambia", "ZMB"),
            CountryEntry::new("Aruba", "ABW"),
            CountryEntry::new("Chile", "CHL"),
        ];
        sort_by_display_name(&mut entries);
        assert_eq!(names(&entries), vec!["Aruba", "Chile", "Zambia"]);
    }

    #[test]
    fn test_accents_and_case_sort_like_a_locale() {
        let mut entries = vec![
            CountryEntry::new("Croatia", "HRV"),
            CountryEntry::new("Côte d'Ivoire", "CIV"),
            CountryEntry::new("Costa Rica", "CRI"),
            CountryEntry::new("Curaçao", "CUW"),
            CountryEntry::new("Cuba", "CUB"),
            CountryEntry::new("bahamas", "BHS"),
            CountryEntry::new("Bahrain", "BHR"),
        ];
        sort_by_display_name(&mut entries);
        assert_eq!(
            names(&entries),
            vec![
                "bahamas",
                "Bahrain",
                "Costa Rica",
                "Côte d'Ivoire",
                "Croatia",
                "Cuba",
                "Curaçao",
            ]
        );
    }

    #[test]
    fn test_equal_names_keep_input_order() {
        let mut entries = vec![
            CountryEntry::new("Congo", "COG"),
            CountryEntry::new("Austria", "AUT"),
            CountryEntry::new("Congo", "COD"),
        ];
        sort_by_display_name(&mut entries);
        let codes: Vec<&str> = entries.iter().map(|e| e.iso_code.as_str()).collect();
        assert_eq!(codes, vec!["AUT", "COG", "COD"]);
    }

    #[test]
    fn test_compare_names_breaks_ties_on_raw_text() {
        assert_eq!(compare_names("Reunion", "Réunion"), Ordering::Less);
        assert_eq!(compare_names("Réunion", "Romania"), Ordering::Less);
        assert_eq!(compare_names("Peru", "Peru"), Ordering::Equal);
    }
}

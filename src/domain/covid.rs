// COVID-19 statistics domain models
use serde::Deserialize;
use std::fmt;

/// Worldwide aggregate counts as returned by `/all`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlobalStats {
    pub cases: u64,
    pub active: u64,
    pub recovered: u64,
    pub deaths: u64,
}

/// Current counts for one scope. The global endpoint carries no `country` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScopeStats {
    #[serde(default)]
    pub country: Option<String>,
    pub cases: u64,
    pub active: u64,
    pub recovered: u64,
    pub deaths: u64,
}

impl ScopeStats {
    pub fn display_name(&self) -> &str {
        match self.country.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Global",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub display_name: String,
    pub iso_code: String,
}

impl CountryEntry {
    pub fn new(display_name: impl Into<String>, iso_code: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            iso_code: iso_code.into(),
        }
    }
}

/// Either the worldwide aggregate or a single country keyed by ISO alpha-3 code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Country(String),
}

impl Scope {
    pub const GLOBAL_CODE: &'static str = "all";

    pub fn from_code(code: &str) -> Self {
        if code == Self::GLOBAL_CODE {
            Scope::Global
        } else {
            Scope::Country(code.to_string())
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Scope::Global => Self::GLOBAL_CODE,
            Scope::Country(code) => code,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_codes() {
        assert_eq!(Scope::from_code("all"), Scope::Global);
        assert_eq!(Scope::from_code("USA"), Scope::Country("USA".to_string()));
        assert_eq!(Scope::Global.code(), "all");
        assert_eq!(Scope::Country("FRA".to_string()).to_string(), "FRA");
    }

    #[test]
    fn test_scope_stats_display_name() {
        let global: ScopeStats =
            serde_json::from_str(r#"{"cases":10,"active":2,"recovered":7,"deaths":1,"updated":1}"#)
                .unwrap();
        assert_eq!(global.display_name(), "Global");

        let country: ScopeStats = serde_json::from_str(
            r#"{"country":"Chile","cases":10,"active":2,"recovered":7,"deaths":1}"#,
        )
        .unwrap();
        assert_eq!(country.display_name(), "Chile");
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        let parsed = serde_json::from_str::<GlobalStats>(
            r#"{"cases":-1,"active":0,"recovered":0,"deaths":0}"#,
        );
        assert!(parsed.is_err());
    }
}

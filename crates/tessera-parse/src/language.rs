//! Supported locales.

use crate::EnumTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale a command sender can select.
///
/// Canonical names are upper-case `LANG_REGION` codes (`EN_US`), which is
/// also the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    /// English (United States).
    #[default]
    EnUs,
    /// English (United Kingdom).
    EnGb,
    /// Dutch (Netherlands).
    NlNl,
    /// German (Germany).
    DeDe,
    /// French (France).
    FrFr,
    /// Spanish (Spain).
    EsEs,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::EnUs,
        Self::EnGb,
        Self::NlNl,
        Self::DeDe,
        Self::FrFr,
        Self::EsEs,
    ];

    /// Returns the canonical code, e.g. `"EN_US"`.
    #[must_use]
    pub const fn canonical_name(&self) -> &'static str {
        match self {
            Self::EnUs => "EN_US",
            Self::EnGb => "EN_GB",
            Self::NlNl => "NL_NL",
            Self::DeDe => "DE_DE",
            Self::FrFr => "FR_FR",
            Self::EsEs => "ES_ES",
        }
    }

    /// Returns the language's own name for itself.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::EnUs => "English (US)",
            Self::EnGb => "English (UK)",
            Self::NlNl => "Nederlands",
            Self::DeDe => "Deutsch",
            Self::FrFr => "Français",
            Self::EsEs => "Español",
        }
    }

    /// Every supported language.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// Lookup table keyed by canonical code, defaulting to `default`.
    #[must_use]
    pub fn table(default: Self) -> EnumTable<Self> {
        EnumTable::from_entries(
            default,
            Self::ALL.iter().map(|lang| (lang.canonical_name(), *lang)),
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_en_us() {
        assert_eq!(Language::default(), Language::EnUs);
    }

    #[test]
    fn test_table_covers_all() {
        let table = Language::table(Language::EnUs);
        assert_eq!(table.len(), Language::all().len());
        for lang in Language::all() {
            assert_eq!(table.lookup(lang.canonical_name()), Some(lang));
        }
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        for lang in Language::all() {
            let json = serde_json::to_string(lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.canonical_name()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::NlNl.to_string(), "NL_NL");
        assert_eq!(Language::NlNl.display_name(), "Nederlands");
    }
}

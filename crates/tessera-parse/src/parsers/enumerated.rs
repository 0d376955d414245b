//! Enumerated-value parsers.

use crate::{ArgumentParser, EnumTable, Language};
use tessera_core::{CommandValue, Outcome};

/// Parses a token into one of a fixed set of named values.
///
/// The token is matched case-insensitively against an [`EnumTable`]. Empty or
/// unknown tokens fall back to the table's default, so the result is always
/// present.
///
/// # Example
///
/// ```
/// use tessera_core::CommandValue;
/// use tessera_parse::{ArgumentParser, EnumParser, EnumTable};
///
/// let parser = EnumParser::new(EnumTable::from_entries(0u8, [("low", 1), ("high", 2)]));
///
/// assert_eq!(parser.parse(&CommandValue::new("level", "HIGH")).value(), Some(&2));
/// assert_eq!(parser.parse(&CommandValue::new("level", "medium")).value(), Some(&0));
/// ```
#[derive(Debug, Clone)]
pub struct EnumParser<T> {
    table: EnumTable<T>,
}

impl<T> EnumParser<T> {
    /// Creates a parser over `table`.
    pub fn new(table: EnumTable<T>) -> Self {
        Self { table }
    }

    /// Returns the lookup table.
    pub fn table(&self) -> &EnumTable<T> {
        &self.table
    }
}

impl<T> ArgumentParser for EnumParser<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Output = T;

    fn parse(&self, value: &CommandValue) -> Outcome<T> {
        let token = value.raw();
        let parsed = match self.table.lookup(token) {
            Some(found) => found,
            None => {
                tracing::warn!(argument = value.key(), token, "unknown name, using default");
                self.table.default_value()
            }
        };
        Outcome::of_value(parsed.clone())
    }

    fn name(&self) -> &'static str {
        "EnumParser"
    }
}

/// Parses a locale code such as `en_us` into a [`Language`].
///
/// Unknown codes resolve to the configured default (`EN_US` unless changed).
#[derive(Debug, Clone)]
pub struct LanguageParser {
    inner: EnumParser<Language>,
}

impl LanguageParser {
    /// Creates a parser defaulting to [`Language::EnUs`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_default(Language::default())
    }

    /// Creates a parser with a different fallback language.
    #[must_use]
    pub fn with_default(default: Language) -> Self {
        Self {
            inner: EnumParser::new(Language::table(default)),
        }
    }

    /// Returns the fallback language.
    #[must_use]
    pub fn default_language(&self) -> Language {
        *self.inner.table().default_value()
    }
}

impl Default for LanguageParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentParser for LanguageParser {
    type Output = Language;

    fn parse(&self, value: &CommandValue) -> Outcome<Language> {
        self.inner.parse(value)
    }

    fn name(&self) -> &'static str {
        "LanguageParser"
    }
}

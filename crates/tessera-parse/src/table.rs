//! Name tables for enumerated values.

use indexmap::IndexMap;

/// Maps canonical upper-case names to values, with a fallback default.
///
/// Names are stored upper-cased, so lookups are case-insensitive.
///
/// # Example
///
/// ```
/// use tessera_parse::EnumTable;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Mode { Survival, Creative }
///
/// let table = EnumTable::new(Mode::Survival).with_entry("creative", Mode::Creative);
///
/// assert_eq!(table.lookup("Creative"), Some(&Mode::Creative));
/// assert_eq!(table.lookup("spectator"), None);
/// assert_eq!(table.default_value(), &Mode::Survival);
/// ```
#[derive(Debug, Clone)]
pub struct EnumTable<T> {
    entries: IndexMap<String, T>,
    default: T,
}

impl<T> EnumTable<T> {
    /// Creates an empty table with the given default.
    pub fn new(default: T) -> Self {
        Self {
            entries: IndexMap::new(),
            default,
        }
    }

    /// Creates a table from `(name, value)` pairs.
    pub fn from_entries<I, S>(default: T, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .fold(Self::new(default), |table, (name, value)| table.with_entry(name, value))
    }

    /// Adds an entry, replacing any value under the same name.
    #[must_use]
    pub fn with_entry(mut self, name: impl AsRef<str>, value: T) -> Self {
        self.entries.insert(name.as_ref().to_uppercase(), value);
        self
    }

    /// Replaces the default.
    #[must_use]
    pub fn with_default(mut self, default: T) -> Self {
        self.default = default;
        self
    }

    /// Looks up a name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Returns the fallback value.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Canonical names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of named entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no named entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

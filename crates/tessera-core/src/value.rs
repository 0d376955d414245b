//! Raw command values.

use std::fmt;

/// One tokenized command argument: its key and its value.
///
/// Command tokenizers produce `CommandValue<String>`; parsers consume it and
/// never mutate it. [`map`](CommandValue::map) re-types the value while
/// keeping the key.
///
/// # Example
///
/// ```
/// use tessera_core::CommandValue;
///
/// let value = CommandValue::new("players", "steve,alex");
/// assert_eq!(value.key(), "players");
/// assert_eq!(value.raw(), "steve,alex");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandValue<T = String> {
    key: String,
    value: T,
}

impl CommandValue<String> {
    /// Creates a raw command value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the raw text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the raw text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<T> CommandValue<T> {
    /// Creates a command value holding an already-typed value.
    pub fn typed(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Returns the argument key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the command value and returns the value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Maps the value, keeping the key.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CommandValue<U> {
        CommandValue {
            key: self.key,
            value: f(self.value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for CommandValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

//! UUID parser.

use crate::ArgumentParser;
use tessera_core::{CommandValue, Outcome};
use uuid::Uuid;

/// Parses a hyphenated (or simple, braced, URN) UUID.
///
/// Empty or malformed tokens yield the sentinel, [`Uuid::nil`] by default.
/// The result is always present.
///
/// # Example
///
/// ```
/// use tessera_core::CommandValue;
/// use tessera_parse::{ArgumentParser, UuidParser};
/// use uuid::Uuid;
///
/// let parser = UuidParser::new();
/// let id = parser.parse(&CommandValue::new("player", "67e55044-10b1-426f-9247-bb680e5fe0c8"));
/// assert_eq!(id.value().map(Uuid::to_string).as_deref(), Some("67e55044-10b1-426f-9247-bb680e5fe0c8"));
///
/// assert_eq!(parser.parse(&CommandValue::new("player", "")).value(), Some(&Uuid::nil()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidParser {
    sentinel: Uuid,
}

impl UuidParser {
    /// Creates a parser with the nil sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `sentinel` for empty or malformed input.
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: Uuid) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Returns the sentinel.
    #[must_use]
    pub fn sentinel(&self) -> Uuid {
        self.sentinel
    }
}

impl ArgumentParser for UuidParser {
    type Output = Uuid;

    fn parse(&self, value: &CommandValue) -> Outcome<Uuid> {
        if value.is_empty() {
            return Outcome::of_value(self.sentinel);
        }

        match Uuid::try_parse(value.raw()) {
            Ok(id) => Outcome::of_value(id),
            Err(e) => {
                tracing::warn!(argument = value.key(), error = %e, "malformed uuid, using sentinel");
                Outcome::of_value(self.sentinel)
            }
        }
    }

    fn name(&self) -> &'static str {
        "UuidParser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Option<Uuid> {
        UuidParser::new()
            .parse(&CommandValue::new("id", raw))
            .into_option()
    }

    #[test]
    fn test_valid_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse(&id.to_string()), Some(id));
    }

    #[test]
    fn test_uppercase_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse(&id.to_string().to_uppercase()), Some(id));
    }

    #[test]
    fn test_empty_yields_nil() {
        assert_eq!(parse(""), Some(Uuid::nil()));
    }

    #[test]
    fn test_malformed_yields_nil() {
        assert_eq!(parse("not-a-uuid"), Some(Uuid::nil()));
        assert_eq!(parse("67e55044-10b1-426f-9247"), Some(Uuid::nil()));
    }

    #[test]
    fn test_custom_sentinel() {
        let sentinel = Uuid::new_v4();
        let parser = UuidParser::new().with_sentinel(sentinel);

        assert_eq!(parser.sentinel(), sentinel);
        assert_eq!(parser.parse(&CommandValue::new("id", "zzz")).value(), Some(&sentinel));
    }
}

//! Parser registry.
//!
//! Parsers are registered once at startup, keyed by the type they produce,
//! and looked up by that type when a command argument is resolved.
//!
//! # Example
//!
//! ```rust
//! use tessera_core::CommandValue;
//! use tessera_parse::{ParserRegistry, UuidParser};
//! use uuid::Uuid;
//!
//! let mut registry = ParserRegistry::new();
//! registry.register(UuidParser::new());
//!
//! let parser = registry.lookup::<Uuid>().into_option().unwrap();
//! let parsed = parser.parse(&CommandValue::new("player", ""));
//! assert_eq!(parsed.value(), Some(&Uuid::nil()));
//!
//! assert!(registry.lookup::<u16>().is_absent());
//! ```

use crate::parsers::{BoolParser, FromStrParser, LanguageParser, ListParser, StringParser, UuidParser};
use crate::{ArgumentParser, Language, SharedParser, DEFAULT_DELIMITER};
use indexmap::IndexMap;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;
use tessera_core::{Guard, Outcome};

/// Settings for the stock parsers installed by [`ParserRegistry::with_defaults`].
#[derive(Debug, Clone)]
pub struct ParserDefaults {
    /// Delimiter for `Vec<String>` arguments.
    pub list_delimiter: char,
    /// Fallback for unknown language codes.
    pub default_language: Language,
    /// Guard list element conversions run under.
    pub guard: Guard,
}

impl Default for ParserDefaults {
    fn default() -> Self {
        Self {
            list_delimiter: DEFAULT_DELIMITER,
            default_language: Language::default(),
            guard: Guard::default(),
        }
    }
}

struct Entry {
    type_name: &'static str,
    parser_name: &'static str,
    // Holds a `SharedParser<T>` for the `TypeId` of `T` it is keyed by.
    parser: Arc<dyn Any + Send + Sync>,
}

/// Maps target types to the parser producing them.
///
/// Each type has at most one parser; registering another one for the same
/// type replaces it. The registry is `Send + Sync`, so once populated it can
/// be shared behind an `Arc` and read from any thread.
#[derive(Default)]
pub struct ParserRegistry {
    entries: IndexMap<TypeId, Entry>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates a registry with the stock parsers.
    ///
    /// Covers `String`, `bool`, `i32`, `i64`, `u32`, `u64`, `f64`, `Uuid`,
    /// `Language` and `Vec<String>`.
    #[must_use]
    pub fn with_defaults(defaults: &ParserDefaults) -> Self {
        let mut registry = Self::new();
        registry.register(StringParser);
        registry.register(BoolParser);
        registry.register(FromStrParser::<i32>::new());
        registry.register(FromStrParser::<i64>::new());
        registry.register(FromStrParser::<u32>::new());
        registry.register(FromStrParser::<u64>::new());
        registry.register(FromStrParser::<f64>::new());
        registry.register(UuidParser::new());
        registry.register(LanguageParser::with_default(defaults.default_language));
        registry.register(
            ListParser::new()
                .with_delimiter(defaults.list_delimiter)
                .with_guard(defaults.guard.clone()),
        );
        registry
    }

    /// Registers `parser` for its output type.
    pub fn register<P: ArgumentParser>(&mut self, parser: P) {
        let shared: SharedParser<P::Output> = Arc::new(parser);
        self.register_shared(shared);
    }

    /// Registers an already shared parser.
    pub fn register_shared<T: 'static>(&mut self, parser: SharedParser<T>) {
        let type_name = std::any::type_name::<T>();
        let parser_name = parser.name();
        let entry = Entry {
            type_name,
            parser_name,
            parser: Arc::new(parser),
        };

        if let Some(previous) = self.entries.insert(TypeId::of::<T>(), entry) {
            tracing::debug!(
                target_type = type_name,
                previous = previous.parser_name,
                parser = parser_name,
                "replacing registered parser"
            );
        }
    }

    /// Looks up the parser for `T`. A miss is absent, not an error.
    pub fn lookup<T: 'static>(&self) -> Outcome<SharedParser<T>> {
        let found = self
            .entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.parser.downcast_ref::<SharedParser<T>>())
            .cloned();
        Outcome::of_option(found)
    }

    /// Returns `true` if a parser for `T` is registered.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of registered parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parsers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the registered target types, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.type_name)
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parser_count", &self.entries.len())
            .finish()
    }
}

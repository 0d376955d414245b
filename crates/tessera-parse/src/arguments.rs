//! Argument resolution for a single command invocation.
//!
//! [`CommandArguments`] holds the raw values a tokenizer produced for one
//! command. [`ArgumentResolver`] turns them into typed values using a shared
//! [`ParserRegistry`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tessera_core::CommandValue;
//! use tessera_parse::{ArgumentResolver, CommandArguments, Language, ParserDefaults, ParserRegistry};
//!
//! let registry = Arc::new(ParserRegistry::with_defaults(&ParserDefaults::default()));
//! let resolver = ArgumentResolver::new(registry);
//!
//! let args: CommandArguments = [
//!     CommandValue::new("lang", "nl_nl"),
//!     CommandValue::new("count", "3"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(args.get::<Language>("lang", &resolver).into_option(), Some(Language::NlNl));
//! assert_eq!(args.require::<u32>("count", &resolver).ok(), Some(3));
//! assert!(args.get::<u32>("missing", &resolver).is_absent());
//! ```

use crate::ParserRegistry;
use std::sync::Arc;
use tessera_core::{ArgumentError, ArgumentResult, CommandValue, Guard, Outcome};
use tessera_telemetry::metrics;

/// Raw argument values for one command invocation, in input order.
///
/// When a key occurs more than once, lookups see the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct CommandArguments {
    values: Vec<CommandValue>,
}

impl CommandArguments {
    /// Creates an empty set of arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value.
    pub fn push(&mut self, value: CommandValue) {
        self.values.push(value);
    }

    /// Returns `true` if `key` was supplied.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Returns the first value supplied under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&CommandValue> {
        self.values.iter().find(|value| value.key() == key)
    }

    /// Returns the raw token supplied under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.value(key).map(CommandValue::raw)
    }

    /// Number of supplied values, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the values in input order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandValue> {
        self.values.iter()
    }

    /// Parses the value under `key` as `T`.
    ///
    /// A key that was not supplied is absent.
    pub fn get<T: 'static>(&self, key: &str, resolver: &ArgumentResolver) -> Outcome<T> {
        match self.value(key) {
            Some(value) => resolver.resolve(value),
            None => Outcome::empty(),
        }
    }

    /// Parses the value under `key` as `T`, requiring it to be present.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::MissingArgument` if the key was not supplied or
    /// its value did not parse, or the error of a failed parse.
    pub fn require<T: 'static>(&self, key: &str, resolver: &ArgumentResolver) -> ArgumentResult<T> {
        self.get(key, resolver).or_error(|| ArgumentError::missing(key))
    }
}

impl FromIterator<CommandValue> for CommandArguments {
    fn from_iter<I: IntoIterator<Item = CommandValue>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<CommandValue> for CommandArguments {
    fn extend<I: IntoIterator<Item = CommandValue>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CommandArguments {
    type Item = &'a CommandValue;
    type IntoIter = std::slice::Iter<'a, CommandValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Resolves raw values into typed values through a shared registry.
///
/// Every parse runs under the resolver's [`Guard`], and every attempt is
/// counted in the `tessera_arguments_parsed_total` metric.
#[derive(Debug, Clone)]
pub struct ArgumentResolver {
    registry: Arc<ParserRegistry>,
    guard: Guard,
}

impl ArgumentResolver {
    /// Creates a resolver with the default guard.
    #[must_use]
    pub fn new(registry: Arc<ParserRegistry>) -> Self {
        Self::with_guard(registry, Guard::default())
    }

    /// Creates a resolver reporting failures through `guard`.
    #[must_use]
    pub fn with_guard(registry: Arc<ParserRegistry>, guard: Guard) -> Self {
        Self { registry, guard }
    }

    /// Returns the registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<ParserRegistry> {
        &self.registry
    }

    /// Returns the guard.
    #[must_use]
    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    /// Parses `value` as `T`.
    ///
    /// A type without a registered parser is a configuration error and yields
    /// `Failed(UnknownParser)`.
    pub fn resolve<T: 'static>(&self, value: &CommandValue) -> Outcome<T> {
        let Some(parser) = self.registry.lookup::<T>().into_option() else {
            let type_name = std::any::type_name::<T>();
            tracing::warn!(argument = value.key(), target_type = type_name, "no parser registered");
            metrics::record_parser_miss(type_name);
            return Outcome::of_error(ArgumentError::unknown_parser::<T>());
        };

        let outcome = self
            .guard
            .catch(|| parser.parse(value))
            .flatten()
            .inspect_err(|error| metrics::record_guard_failure(error.error_code()));

        metrics::record_parse(parser.name(), outcome.kind());
        outcome
    }
}

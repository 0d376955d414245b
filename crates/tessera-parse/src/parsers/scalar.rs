//! Single-value parsers.

use crate::parser::short_type_name;
use crate::ArgumentParser;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use tessera_core::{CommandValue, Outcome};

/// Passes the raw token through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringParser;

impl ArgumentParser for StringParser {
    type Output = String;

    fn parse(&self, value: &CommandValue) -> Outcome<String> {
        Outcome::of_value(value.raw().to_owned())
    }

    fn name(&self) -> &'static str {
        "StringParser"
    }
}

/// Parses a boolean flag.
///
/// Accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0` in any case.
/// Anything else is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolParser;

impl ArgumentParser for BoolParser {
    type Output = bool;

    fn parse(&self, value: &CommandValue) -> Outcome<bool> {
        match value.raw().trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Outcome::of_value(true),
            "false" | "no" | "off" | "0" => Outcome::of_value(false),
            _ => {
                tracing::warn!(argument = value.key(), "not a boolean");
                Outcome::empty()
            }
        }
    }

    fn name(&self) -> &'static str {
        "BoolParser"
    }
}

/// Parses any [`FromStr`] type, e.g. numbers.
///
/// Surrounding whitespace is ignored. Blank or malformed tokens are absent.
///
/// ```
/// use tessera_core::CommandValue;
/// use tessera_parse::{ArgumentParser, FromStrParser};
///
/// let parser = FromStrParser::<u16>::new();
/// assert_eq!(parser.parse(&CommandValue::new("port", " 8080 ")).value(), Some(&8080));
/// assert!(parser.parse(&CommandValue::new("port", "99999")).is_absent());
/// ```
pub struct FromStrParser<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> FromStrParser<T> {
    /// Creates the parser.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for FromStrParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FromStrParser<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FromStrParser<T> {}

impl<T> fmt::Debug for FromStrParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FromStrParser<{}>", short_type_name::<T>())
    }
}

impl<T> ArgumentParser for FromStrParser<T>
where
    T: FromStr + 'static,
    T::Err: fmt::Display,
{
    type Output = T;

    fn parse(&self, value: &CommandValue) -> Outcome<T> {
        let token = value.raw().trim();
        if token.is_empty() {
            return Outcome::empty();
        }

        match token.parse() {
            Ok(parsed) => Outcome::of_value(parsed),
            Err(e) => {
                tracing::warn!(
                    argument = value.key(),
                    target_type = short_type_name::<T>(),
                    error = %e,
                    "unparseable value"
                );
                Outcome::empty()
            }
        }
    }

    fn name(&self) -> &'static str {
        "FromStrParser"
    }
}

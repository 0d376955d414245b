//! Core parser trait.
//!
//! The [`ArgumentParser`] trait is the contract every type parser implements.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tessera_core::{CommandValue, Outcome};

/// Converts one raw command token into a typed value.
///
/// Implementations must not panic. Expected misses are handled by
/// defaulting, clamping or discarding, and `Outcome::Failed` is left to the
/// guarded call site. Configuration (delimiters, converters, rules) is fixed
/// at construction; `parse` only reads it.
///
/// # Implementing `ArgumentParser`
///
/// ```rust
/// use tessera_core::{CommandValue, Outcome};
/// use tessera_parse::ArgumentParser;
///
/// /// Parses a world coordinate, ignoring surrounding whitespace.
/// struct CoordinateParser;
///
/// impl ArgumentParser for CoordinateParser {
///     type Output = f64;
///
///     fn parse(&self, value: &CommandValue) -> Outcome<f64> {
///         Outcome::of_option(value.raw().trim().parse().ok())
///     }
/// }
///
/// let parsed = CoordinateParser.parse(&CommandValue::new("x", " 12.5 "));
/// assert_eq!(parsed.value(), Some(&12.5));
/// ```
pub trait ArgumentParser: Send + Sync + 'static {
    /// The type this parser produces.
    type Output: 'static;

    /// Parses a raw command value.
    fn parse(&self, value: &CommandValue) -> Outcome<Self::Output>;

    /// Returns a short name for logs and metrics.
    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}

/// A parser shared out of the registry.
pub type SharedParser<T> = Arc<dyn ArgumentParser<Output = T>>;

impl<P: ArgumentParser + ?Sized> ArgumentParser for Arc<P> {
    type Output = P::Output;

    fn parse(&self, value: &CommandValue) -> Outcome<Self::Output> {
        (**self).parse(value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Parser backed by a closure.
///
/// # Example
///
/// ```rust
/// use tessera_core::{CommandValue, Outcome};
/// use tessera_parse::{parser_fn, ArgumentParser};
///
/// let upper = parser_fn("UpperParser", |value: &CommandValue| {
///     Outcome::of_value(value.raw().to_uppercase())
/// });
///
/// assert_eq!(upper.parse(&CommandValue::new("k", "abc")).value().map(String::as_str), Some("ABC"));
/// ```
pub struct FnParser<F, T> {
    name: &'static str,
    f: F,
    _output: PhantomData<fn() -> T>,
}

/// Creates a parser from a closure.
pub fn parser_fn<F, T>(name: &'static str, f: F) -> FnParser<F, T>
where
    F: Fn(&CommandValue) -> Outcome<T> + Send + Sync + 'static,
    T: 'static,
{
    FnParser {
        name,
        f,
        _output: PhantomData,
    }
}

impl<F, T> ArgumentParser for FnParser<F, T>
where
    F: Fn(&CommandValue) -> Outcome<T> + Send + Sync + 'static,
    T: 'static,
{
    type Output = T;

    fn parse(&self, value: &CommandValue) -> Outcome<T> {
        (self.f)(value)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<F, T> fmt::Debug for FnParser<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnParser").field("name", &self.name).finish()
    }
}

// Strips module paths (and generic arguments) from a type name.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl ArgumentParser for Doubler {
        type Output = i64;

        fn parse(&self, value: &CommandValue) -> Outcome<i64> {
            Outcome::of_option(value.raw().parse::<i64>().ok()).map(|n| n * 2)
        }
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Doubler.name(), "Doubler");
    }

    #[test]
    fn test_short_type_name_strips_generics() {
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
        assert_eq!(short_type_name::<u8>(), "u8");
    }

    #[test]
    fn test_arc_parser_delegates() {
        let shared: SharedParser<i64> = Arc::new(Doubler);
        assert_eq!(shared.parse(&CommandValue::new("n", "4")).value(), Some(&8));
        assert_eq!(shared.name(), "Doubler");
    }

    #[test]
    fn test_fn_parser() {
        let parser = parser_fn("LengthParser", |value: &CommandValue| {
            Outcome::of_value(value.raw().len())
        });

        assert_eq!(parser.name(), "LengthParser");
        assert_eq!(parser.parse(&CommandValue::new("k", "four")).value(), Some(&4));
    }
}

//! Delimited list parser.

use crate::{ArgumentParser, MinMax};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tessera_core::{CommandValue, Guard, Outcome};

/// Default element delimiter.
pub const DEFAULT_DELIMITER: char = ',';

type Converter<R> = Arc<dyn Fn(&str) -> anyhow::Result<R> + Send + Sync>;

/// Splits a token on a delimiter and converts each element.
///
/// Splitting is lossless: `n` delimiters always give `n + 1` elements, and an
/// empty token gives a single empty element. An optional [`MinMax`] rule
/// keeps a sub-range of the elements; the rest are dropped.
///
/// Every kept element is converted through the parser's [`Guard`]. The first
/// failing conversion fails the whole parse, with the argument key attached.
///
/// # Example
///
/// ```
/// use tessera_core::CommandValue;
/// use tessera_parse::{ArgumentParser, ListParser, MinMax};
///
/// let names = ListParser::new().parse(&CommandValue::new("names", "a,b,c,d"));
/// assert_eq!(names.into_option(), Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]));
///
/// let amounts = ListParser::<u32>::parsing()
///     .with_delimiter(';')
///     .with_rule(MinMax::new(1, 3));
/// let parsed = amounts.parse(&CommandValue::new("amounts", "1;2;3;4"));
/// assert_eq!(parsed.into_option(), Some(vec![2, 3]));
/// ```
///
/// Element types other than `String` need a converter:
///
/// ```compile_fail
/// use tessera_parse::ListParser;
///
/// let parser = ListParser::<u32>::new();
/// ```
pub struct ListParser<R = String> {
    delimiter: char,
    rule: Option<MinMax>,
    converter: Converter<R>,
    guard: Guard,
}

impl ListParser<String> {
    /// Creates a parser that keeps elements as strings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_converter(Arc::new(|element: &str| -> anyhow::Result<String> {
            Ok(element.to_owned())
        }))
    }
}

impl Default for ListParser<String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> ListParser<R> {
    /// Creates a parser that converts elements with `converter`.
    pub fn with_converter<F, E>(converter: F) -> Self
    where
        F: Fn(&str) -> Result<R, E> + Send + Sync + 'static,
        E: Into<anyhow::Error>,
    {
        Self::from_converter(Arc::new(move |element: &str| -> anyhow::Result<R> {
            converter(element).map_err(Into::into)
        }))
    }

    /// Creates a parser that converts elements with [`FromStr`].
    #[must_use]
    pub fn parsing() -> Self
    where
        R: FromStr,
        R::Err: std::error::Error + Send + Sync + 'static,
    {
        Self::with_converter(str::parse::<R>)
    }

    fn from_converter(converter: Converter<R>) -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            rule: None,
            converter,
            guard: Guard::default(),
        }
    }

    /// Sets the element delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Keeps only the elements selected by `rule`.
    #[must_use]
    pub fn with_rule(mut self, rule: MinMax) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Sets the guard element conversions run under.
    #[must_use]
    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Returns the delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the bounds rule, if any.
    pub fn rule(&self) -> Option<MinMax> {
        self.rule
    }

    /// Splits `raw` on the delimiter.
    pub fn split<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        raw.split(self.delimiter).collect()
    }
}

impl<R: 'static> ArgumentParser for ListParser<R> {
    type Output = Vec<R>;

    fn parse(&self, value: &CommandValue) -> Outcome<Vec<R>> {
        let key = value.key();
        let elements = self.split(value.raw());

        let kept = match self.rule {
            Some(rule) => {
                let bounds = rule.clamp(elements.len());
                if bounds.len() < elements.len() {
                    tracing::debug!(
                        argument = key,
                        total = elements.len(),
                        start = bounds.start,
                        end = bounds.end,
                        "dropping elements outside bounds"
                    );
                }
                &elements[bounds.range()]
            }
            None => &elements[..],
        };

        let mut converted = Vec::with_capacity(kept.len());
        for &element in kept {
            let outcome = self.guard.apply_with(
                |element: &str| (self.converter)(element),
                element,
                |error| (self.guard.handler())(&error.clone().with_key(key)),
            );
            match outcome {
                Outcome::Failed(error) => return Outcome::Failed(error.with_key(key)),
                other => converted.extend(other.into_option()),
            }
        }

        Outcome::of_value(converted)
    }

    fn name(&self) -> &'static str {
        "ListParser"
    }
}

impl<R> Clone for ListParser<R> {
    fn clone(&self) -> Self {
        Self {
            delimiter: self.delimiter,
            rule: self.rule,
            converter: Arc::clone(&self.converter),
            guard: self.guard.clone(),
        }
    }
}

impl<R> fmt::Debug for ListParser<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListParser")
            .field("delimiter", &self.delimiter)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

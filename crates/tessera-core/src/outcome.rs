//! Tri-state result container.
//!
//! [`Outcome<T>`] is what every parse attempt produces: a value, the absence
//! of one, or an [`ArgumentError`]. Absence is a valid result ("no value");
//! failure means something unanticipated happened during conversion.

use crate::{ArgumentError, ArgumentResult};

/// A value, the absence of one, or an error.
///
/// Exactly one variant is active. Mapping and chaining never mask an absence
/// or a failure; they pass through unchanged.
///
/// # Example
///
/// ```
/// use tessera_core::Outcome;
///
/// let amount = Outcome::of_value(20_u32).map(|n| n * 2);
/// assert_eq!(amount.or_else(0), 40);
///
/// let nothing: Outcome<u32> = Outcome::empty();
/// assert_eq!(nothing.map(|n| n * 2).or_else(7), 7);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// A value is present.
    Present(T),
    /// No value, and no error.
    Absent,
    /// Conversion failed with an error.
    Failed(ArgumentError),
}

impl<T> Outcome<T> {
    /// Creates a present outcome.
    pub fn of_value(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates a failed outcome.
    pub fn of_error(error: impl Into<ArgumentError>) -> Self {
        Self::Failed(error.into())
    }

    /// Creates an absent outcome.
    pub fn empty() -> Self {
        Self::Absent
    }

    /// Creates a present outcome from `Some`, an absent one from `None`.
    pub fn of_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Returns `true` if a value is present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if neither a value nor an error is held.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if an error is held.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns a short label for the active variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Present(_) => "present",
            Self::Absent => "absent",
            Self::Failed(_) => "failed",
        }
    }

    /// Returns a reference to the value, if present.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the error, if failed.
    #[must_use]
    pub fn error(&self) -> Option<&ArgumentError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Borrows the contents.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Present(value) => Outcome::Present(value),
            Self::Absent => Outcome::Absent,
            Self::Failed(error) => Outcome::Failed(error.clone()),
        }
    }

    /// Applies `f` to a present value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Present(value) => Outcome::Present(f(value)),
            Self::Absent => Outcome::Absent,
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Chains another fallible step onto a present value.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Outcome::Absent,
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Turns a present value that fails `predicate` into an absence.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            Self::Present(_) => Self::Absent,
            other => other,
        }
    }

    /// Runs `f` on a present value and returns the outcome unchanged.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Self::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Runs `f` on a held error and returns the outcome unchanged.
    pub fn inspect_err(self, f: impl FnOnce(&ArgumentError)) -> Self {
        if let Self::Failed(error) = &self {
            f(error);
        }
        self
    }

    /// Returns the value if present, otherwise `default`.
    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            _ => default,
        }
    }

    /// Returns the value if present, otherwise the result of `f`.
    pub fn or_else_get(self, f: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(value) => value,
            _ => f(),
        }
    }

    /// Converts into an `Option`, discarding any error.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into a `Result`, keeping absence distinct from failure.
    pub fn into_result(self) -> ArgumentResult<Option<T>> {
        match self {
            Self::Present(value) => Ok(Some(value)),
            Self::Absent => Ok(None),
            Self::Failed(error) => Err(error),
        }
    }

    /// Converts into a `Result`, mapping absence to the error built by `f`.
    pub fn or_error(self, f: impl FnOnce() -> ArgumentError) -> ArgumentResult<T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(f()),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Outcome<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_option(value)
    }
}

impl<T> From<ArgumentResult<T>> for Outcome<T> {
    fn from(result: ArgumentResult<T>) -> Self {
        match result {
            Ok(value) => Self::Present(value),
            Err(error) => Self::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn failed<T>() -> Outcome<T> {
        Outcome::of_error(ArgumentError::missing("key"))
    }

    #[test]
    fn test_constructors() {
        assert!(Outcome::of_value(1).is_present());
        assert!(Outcome::<i32>::empty().is_absent());
        assert!(failed::<i32>().is_failed());
        assert!(Outcome::<i32>::default().is_absent());
    }

    #[test]
    fn test_exactly_one_state() {
        for outcome in [Outcome::of_value(1), Outcome::empty(), failed()] {
            let states = [outcome.is_present(), outcome.is_absent(), outcome.is_failed()];
            assert_eq!(states.iter().filter(|s| **s).count(), 1);
        }
    }

    #[test]
    fn test_of_option() {
        assert_eq!(Outcome::of_option(Some(3)).value(), Some(&3));
        assert!(Outcome::<i32>::of_option(None).is_absent());
        assert!(Outcome::from(Some("x")).is_present());
    }

    #[test]
    fn test_map_passes_through_absence_and_failure() {
        assert_eq!(Outcome::of_value(2).map(|n| n + 1).value(), Some(&3));
        assert!(Outcome::<i32>::empty().map(|n| n + 1).is_absent());

        let mapped = failed::<i32>().map(|n| n + 1);
        assert_eq!(mapped.error().map(ArgumentError::error_code), Some("MISSING_ARGUMENT"));
    }

    #[test]
    fn test_and_then_and_flatten() {
        let chained = Outcome::of_value(4).and_then(|n| {
            if n > 3 {
                Outcome::of_value(n * 10)
            } else {
                Outcome::empty()
            }
        });
        assert_eq!(chained.value(), Some(&40));

        let nested = Outcome::of_value(Outcome::<i32>::empty());
        assert!(nested.flatten().is_absent());

        let nested: Outcome<Outcome<i32>> = failed();
        assert!(nested.flatten().is_failed());
    }

    #[test]
    fn test_filter() {
        assert!(Outcome::of_value(5).filter(|n| *n > 3).is_present());
        assert!(Outcome::of_value(1).filter(|n| *n > 3).is_absent());
        assert!(failed::<i32>().filter(|_| true).is_failed());
    }

    #[test]
    fn test_or_else() {
        assert_eq!(Outcome::of_value(1).or_else(9), 1);
        assert_eq!(Outcome::empty().or_else(9), 9);
        assert_eq!(failed().or_else(9), 9);
        assert_eq!(Outcome::<i32>::empty().or_else_get(|| 11), 11);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::of_value(1).into_result().unwrap(), Some(1));
        assert_eq!(Outcome::<i32>::empty().into_result().unwrap(), None);
        assert!(failed::<i32>().into_result().is_err());
    }

    #[test]
    fn test_or_error() {
        let err = Outcome::<i32>::empty()
            .or_error(|| ArgumentError::missing("amount"))
            .unwrap_err();
        assert_eq!(err.key(), Some("amount"));

        assert_eq!(Outcome::of_value(2).or_error(|| ArgumentError::missing("x")).unwrap(), 2);
    }

    #[test]
    fn test_inspect() {
        let mut seen = None;
        let _ = Outcome::of_value(8).inspect(|n| seen = Some(*n));
        assert_eq!(seen, Some(8));

        let mut code = None;
        let _ = failed::<i32>().inspect_err(|e| code = Some(e.error_code()));
        assert_eq!(code, Some("MISSING_ARGUMENT"));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Outcome::of_value(()).kind(), "present");
        assert_eq!(Outcome::<()>::empty().kind(), "absent");
        assert_eq!(failed::<()>().kind(), "failed");
    }

    #[test]
    fn test_from_result() {
        let ok: ArgumentResult<i32> = Ok(3);
        assert!(Outcome::from(ok).is_present());

        let err: ArgumentResult<i32> = Err(ArgumentError::missing("x"));
        assert!(Outcome::from(err).is_failed());
    }

    proptest! {
        #[test]
        fn prop_map_keeps_state(value in any::<i64>(), state in 0_u8..3) {
            let outcome = match state {
                0 => Outcome::of_value(value),
                1 => Outcome::empty(),
                _ => failed(),
            };
            let kind = outcome.kind();
            let mapped = outcome.map(|v| v.wrapping_mul(3));
            prop_assert_eq!(mapped.kind(), kind);
        }
    }
}

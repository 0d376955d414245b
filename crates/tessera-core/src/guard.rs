//! Guarded invocation.
//!
//! A [`Guard`] runs a unit of work and makes sure nothing it raises crosses
//! the call boundary. Both `Err` returns and panics are intercepted: they are
//! turned into an [`ArgumentError`], handed to an error handler, and (for
//! transformations) returned as a failed [`Outcome`].
//!
//! # Example
//!
//! ```
//! use tessera_core::{Guard, Outcome};
//!
//! let guard = Guard::silent();
//!
//! let parsed = guard.apply(|raw: &str| raw.parse::<u32>(), "42");
//! assert_eq!(parsed.value(), Some(&42));
//!
//! let parsed = guard.apply(|raw: &str| raw.parse::<u32>(), "forty-two");
//! assert!(parsed.is_failed());
//! ```

use crate::{ArgumentError, ErrorReporter, Outcome};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Shared error handler invoked with every intercepted failure.
pub type ErrorHandler = Arc<dyn Fn(&ArgumentError) + Send + Sync>;

/// Safe-invocation wrapper.
///
/// Every shape comes in two forms: one that reports to the guard's own
/// handler, and a `*_with` form that takes a handler for that call only.
/// The default handler is an [`ErrorReporter`] logging through `tracing`.
///
/// The handler runs synchronously on the calling thread, exactly once per
/// intercepted failure.
#[derive(Clone)]
pub struct Guard {
    handler: ErrorHandler,
}

impl Default for Guard {
    fn default() -> Self {
        Self::reporting(ErrorReporter::default())
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

impl Guard {
    /// Creates a guard that reports failures through the given reporter.
    #[must_use]
    pub fn reporting(reporter: ErrorReporter) -> Self {
        Self {
            handler: reporter.into_handler(),
        }
    }

    /// Creates a guard with a custom error handler.
    #[must_use]
    pub fn with_handler(handler: impl Fn(&ArgumentError) + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Creates a guard with a shared error handler.
    #[must_use]
    pub fn with_shared_handler(handler: ErrorHandler) -> Self {
        Self { handler }
    }

    /// Creates a guard that swallows failures without reporting them.
    #[must_use]
    pub fn silent() -> Self {
        Self::with_handler(|_| {})
    }

    /// Returns the guard's error handler.
    #[must_use]
    pub fn handler(&self) -> &ErrorHandler {
        &self.handler
    }

    /// Runs an action, reporting any failure to the guard's handler.
    pub fn run<E>(&self, action: impl FnOnce() -> Result<(), E>)
    where
        E: Into<anyhow::Error>,
    {
        self.run_with(action, |e| (self.handler)(e));
    }

    /// Runs an action, reporting any failure to `handler`.
    pub fn run_with<E>(
        &self,
        action: impl FnOnce() -> Result<(), E>,
        handler: impl FnOnce(&ArgumentError),
    ) where
        E: Into<anyhow::Error>,
    {
        if let Err(error) = invoke(action) {
            handler(&error);
        }
    }

    /// Runs an action over `input`, reporting any failure to the guard's handler.
    pub fn accept<T, E>(&self, action: impl FnOnce(T) -> Result<(), E>, input: T)
    where
        E: Into<anyhow::Error>,
    {
        self.accept_with(action, input, |e| (self.handler)(e));
    }

    /// Runs an action over `input`, reporting any failure to `handler`.
    pub fn accept_with<T, E>(
        &self,
        action: impl FnOnce(T) -> Result<(), E>,
        input: T,
        handler: impl FnOnce(&ArgumentError),
    ) where
        E: Into<anyhow::Error>,
    {
        self.run_with(move || action(input), handler);
    }

    /// Transforms `input`, capturing the result in an [`Outcome`].
    ///
    /// Success yields `Present(result)` and leaves the handler untouched.
    /// An error or a panic yields `Failed(error)` after the guard's handler
    /// has seen that error.
    pub fn apply<T, R, E>(&self, transform: impl FnOnce(T) -> Result<R, E>, input: T) -> Outcome<R>
    where
        E: Into<anyhow::Error>,
    {
        self.apply_with(transform, input, |e| (self.handler)(e))
    }

    /// Transforms `input`, reporting any failure to `handler`.
    pub fn apply_with<T, R, E>(
        &self,
        transform: impl FnOnce(T) -> Result<R, E>,
        input: T,
        handler: impl FnOnce(&ArgumentError),
    ) -> Outcome<R>
    where
        E: Into<anyhow::Error>,
    {
        match invoke(move || transform(input)) {
            Ok(value) => Outcome::Present(value),
            Err(error) => {
                handler(&error);
                Outcome::Failed(error)
            }
        }
    }

    /// Transforms `input` where the transformation may legitimately produce
    /// nothing; `Ok(None)` becomes [`Outcome::Absent`].
    pub fn apply_optional<T, R, E>(
        &self,
        transform: impl FnOnce(T) -> Result<Option<R>, E>,
        input: T,
    ) -> Outcome<R>
    where
        E: Into<anyhow::Error>,
    {
        self.apply(transform, input).and_then(Outcome::of_option)
    }

    /// Evaluates `f`, guarding only against panics.
    pub fn catch<R>(&self, f: impl FnOnce() -> R) -> Outcome<R> {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Outcome::Present(value),
            Err(payload) => {
                let error = ArgumentError::panicked(payload);
                (self.handler)(&error);
                Outcome::Failed(error)
            }
        }
    }
}

// Runs `f`, folding both `Err` returns and panics into an `ArgumentError`.
fn invoke<R, E>(f: impl FnOnce() -> Result<R, E>) -> Result<R, ArgumentError>
where
    E: Into<anyhow::Error>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(ArgumentError::invocation(error)),
        Err(payload) => Err(ArgumentError::panicked(payload)),
    }
}

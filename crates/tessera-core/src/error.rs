//! Argument error types.
//!
//! This module provides [`ArgumentError`], the error carried by a failed
//! [`Outcome`](crate::Outcome). Expected misses (unknown enum names, malformed
//! identifiers, out-of-range bounds) never become an `ArgumentError`; parsers
//! degrade those to defaults. Only failures caught at a
//! [`Guard`](crate::Guard) boundary, or escalated by a caller, end up here.

use std::any::Any;
use std::sync::Arc;
use thiserror::Error;

/// Result type alias using [`ArgumentError`].
pub type ArgumentResult<T> = Result<T, ArgumentError>;

/// Error describing an argument conversion that could not complete.
///
/// Causes are shared behind an [`Arc`] so the error (and any
/// [`Outcome`](crate::Outcome) holding it) stays cheaply cloneable.
///
/// # Example
///
/// ```
/// use tessera_core::ArgumentError;
///
/// let err = ArgumentError::missing("target");
/// assert_eq!(err.error_code(), "MISSING_ARGUMENT");
/// assert_eq!(err.key(), Some("target"));
/// ```
#[derive(Error, Debug, Clone)]
pub enum ArgumentError {
    /// A guarded unit of work returned an error.
    #[error("invocation failed: {cause}")]
    Invocation {
        /// Key of the argument being converted, if known.
        key: Option<String>,
        /// The underlying error.
        cause: Arc<anyhow::Error>,
    },

    /// A guarded unit of work panicked.
    #[error("invocation panicked: {message}")]
    Panicked {
        /// Key of the argument being converted, if known.
        key: Option<String>,
        /// Panic message extracted from the payload.
        message: String,
    },

    /// No parser is registered for the requested type.
    #[error("no parser registered for type {type_name}")]
    UnknownParser {
        /// Name of the requested target type.
        type_name: &'static str,
    },

    /// A required argument was not supplied.
    #[error("missing required argument: {key}")]
    MissingArgument {
        /// Key of the missing argument.
        key: String,
    },
}

impl ArgumentError {
    /// Creates an invocation error from any error type.
    pub fn invocation(cause: impl Into<anyhow::Error>) -> Self {
        Self::Invocation {
            key: None,
            cause: Arc::new(cause.into()),
        }
    }

    /// Creates a panic error from a `catch_unwind` payload.
    pub fn panicked(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        Self::Panicked { key: None, message }
    }

    /// Creates an error for a type without a registered parser.
    pub fn unknown_parser<T: ?Sized>() -> Self {
        Self::UnknownParser {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Creates an error for a missing required argument.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingArgument { key: key.into() }
    }

    /// Attaches the argument key to invocation and panic errors.
    ///
    /// Errors that already carry a key keep it.
    #[must_use]
    pub fn with_key(self, key: impl Into<String>) -> Self {
        match self {
            Self::Invocation { key: None, cause } => Self::Invocation {
                key: Some(key.into()),
                cause,
            },
            Self::Panicked { key: None, message } => Self::Panicked {
                key: Some(key.into()),
                message,
            },
            other => other,
        }
    }

    /// Returns the argument key associated with this error, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Invocation { key, .. } | Self::Panicked { key, .. } => key.as_deref(),
            Self::MissingArgument { key } => Some(key.as_str()),
            Self::UnknownParser { .. } => None,
        }
    }

    /// Returns the underlying cause of an invocation error.
    #[must_use]
    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Invocation { cause, .. } => Some(&**cause),
            _ => None,
        }
    }

    /// Returns a stable error code for logs and metrics.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Invocation { .. } => "INVOCATION_FAILED",
            Self::Panicked { .. } => "INVOCATION_PANICKED",
            Self::UnknownParser { .. } => "PARSER_NOT_REGISTERED",
            Self::MissingArgument { .. } => "MISSING_ARGUMENT",
        }
    }
}

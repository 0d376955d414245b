//! Error reporting through the `tracing` facade.
//!
//! [`ErrorReporter`] is the default error handler of a [`Guard`](crate::Guard).
//! It renders an [`ArgumentError`] in one of two styles and emits each line at
//! `error` level.

use crate::{ArgumentError, ErrorHandler};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How much detail a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStyle {
    /// Headline, message, argument key and cause chain on separate lines.
    #[default]
    Friendly,
    /// A single `CODE: message` line.
    Minimal,
}

/// Renders and logs argument errors.
///
/// # Example
///
/// ```
/// use tessera_core::{ArgumentError, ErrorReporter, ReportStyle};
///
/// let reporter = ErrorReporter::new(ReportStyle::Minimal);
/// let lines = reporter.render(&ArgumentError::missing("target"));
///
/// assert_eq!(lines, vec!["MISSING_ARGUMENT: missing required argument: target".to_string()]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReporter {
    style: ReportStyle,
    include_causes: bool,
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self {
            style: ReportStyle::Friendly,
            include_causes: true,
        }
    }
}

impl ErrorReporter {
    /// Creates a reporter with the given style.
    #[must_use]
    pub fn new(style: ReportStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Sets whether friendly reports render the cause chain of invocation errors.
    #[must_use]
    pub fn with_causes(mut self, include_causes: bool) -> Self {
        self.include_causes = include_causes;
        self
    }

    /// Returns the report style.
    #[must_use]
    pub fn style(&self) -> ReportStyle {
        self.style
    }

    /// Renders `error` into log lines.
    #[must_use]
    pub fn render(&self, error: &ArgumentError) -> Vec<String> {
        let mut lines = Vec::new();

        match self.style {
            ReportStyle::Minimal => {
                lines.push(format!("{}: {error}", error.error_code()));
            }
            ReportStyle::Friendly => {
                lines.push(format!("headline: {}", error.error_code()));
                lines.push(format!("message: {error}"));
                if let Some(key) = error.key() {
                    lines.push(format!("argument: {key}"));
                }
                if self.include_causes {
                    if let Some(cause) = error.cause() {
                        // The first link is the cause itself, already part of the message
                        for link in cause.chain().skip(1) {
                            lines.push(format!("  caused by: {link}"));
                        }
                    }
                }
            }
        }

        lines
    }

    /// Renders `error` and emits every line at `error` level.
    pub fn report(&self, error: &ArgumentError) {
        for line in self.render(error) {
            tracing::error!(error_code = error.error_code(), "{line}");
        }
    }

    /// Wraps this reporter as a shared [`ErrorHandler`].
    #[must_use]
    pub fn into_handler(self) -> ErrorHandler {
        Arc::new(move |error: &ArgumentError| self.report(error))
    }
}

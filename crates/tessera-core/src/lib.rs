//! # Tessera Core
//!
//! Core types shared by every Tessera crate:
//!
//! - [`CommandValue`] - A tokenized argument (key + raw text)
//! - [`Outcome`] - Present / absent / failed result container
//! - [`ArgumentError`] - The error carried by a failed outcome
//! - [`Guard`] - Safe invocation: runs work and intercepts errors and panics
//! - [`ErrorReporter`] - Default error handler, logging through `tracing`

#![doc(html_root_url = "https://docs.rs/tessera-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod guard;
mod outcome;
mod report;
mod value;

pub use error::{ArgumentError, ArgumentResult};
pub use guard::{ErrorHandler, Guard};
pub use outcome::Outcome;
pub use report::{ErrorReporter, ReportStyle};
pub use value::CommandValue;

//! Observability for Tessera.
//!
//! - **Logging**: `tracing-subscriber` setup with JSON or pretty output
//! - **Metrics**: parse-outcome counters through the `metrics` facade
//!
//! # Example
//!
//! ```rust,ignore
//! use tessera_telemetry::{init_logging, metrics, LogConfig};
//!
//! init_logging(&LogConfig::production())?;
//! metrics::describe_metrics();
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

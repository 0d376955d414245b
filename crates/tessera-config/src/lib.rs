//! Typed configuration for Tessera.
//!
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! The root type is [`TesseraConfig`]:
//!
//! - [`ParsingConfig`] - stock parser settings (list delimiter, default language)
//! - [`LoggingConfig`] - log level and format
//! - [`ReportingConfig`] - how guarded failures are reported
//!
//! # Example
//!
//! ```no_run
//! use tessera_config::ConfigLoader;
//!
//! # fn main() -> Result<(), tessera_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_optional_file("tessera.toml")?
//!     .with_env_prefix("TESSERA")
//!     .load()?;
//!
//! println!("lists split on {:?}", config.parsing.list_delimiter);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [parsing]
//! list_delimiter = ","
//! default_language = "EN_US"
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! include_location = false
//!
//! [reporting]
//! style = "friendly"
//! include_causes = true
//! ```
//!
//! # Environment Variable Overrides
//!
//! Values can be overridden with variables named `PREFIX__SECTION__KEY`:
//!
//! - `TESSERA__PARSING__LIST_DELIMITER=;`
//! - `TESSERA__LOGGING__LEVEL=tessera_parse=debug`
//! - `TESSERA__REPORTING__STYLE=minimal`

#![warn(missing_docs)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::*;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;

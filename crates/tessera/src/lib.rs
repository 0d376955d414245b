//! # Tessera
//!
//! **Typed command-argument parsing for plugin and game-server command layers**
//!
//! Tessera turns the raw `key=value` tokens of a command invocation into typed
//! values:
//!
//! - **Graceful parsers** – unknown names fall back to defaults, malformed UUIDs
//!   become a sentinel, list bounds are clamped
//! - **Guarded invocation** – errors and panics from converters are caught at a
//!   boundary, reported, and returned as a failed [`Outcome`](core::Outcome)
//! - **Type-keyed registry** – one parser per target type, shared across threads
//! - **Layered configuration** – defaults, TOML/JSON files and environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tessera::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new()
//!         .with_optional_file("tessera.toml")?
//!         .with_env_prefix("TESSERA")
//!         .load()?;
//!     let tessera = Tessera::init(config)?;
//!
//!     let args: CommandArguments = [
//!         CommandValue::new("players", "alex,steve"),
//!         CommandValue::new("lang", "nl_nl"),
//!     ]
//!     .into_iter()
//!     .collect();
//!
//!     let players: Vec<String> = tessera.require(&args, "players")?;
//!     let lang = tessera.get::<Language>(&args, "lang").or_else(Language::EnUs);
//!     println!("{players:?} in {lang}");
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/tessera/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bootstrap;

pub use bootstrap::{BootstrapError, Tessera, TesseraBuilder};

// Re-export core types
pub use tessera_core as core;

// Re-export parsers and the registry
pub use tessera_parse as parse;

// Re-export configuration
pub use tessera_config as config;

// Re-export telemetry
pub use tessera_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use tessera::prelude::*;
///
/// let outcome: Outcome<u8> = Outcome::empty();
/// assert!(outcome.is_absent());
/// ```
pub mod prelude {
    pub use crate::{BootstrapError, Tessera, TesseraBuilder};

    pub use tessera_core::{
        ArgumentError, ArgumentResult, CommandValue, ErrorReporter, Guard, Outcome, ReportStyle,
    };

    pub use tessera_parse::{
        parser_fn, ArgumentParser, ArgumentResolver, CommandArguments, EnumParser, EnumTable,
        Language, LanguageParser, ListParser, MinMax, ParserRegistry, UuidParser,
    };

    pub use tessera_config::{ConfigError, ConfigLoader, TesseraConfig};
}

//! Typed argument parsing for Tessera.
//!
//! This crate turns raw command tokens into typed values:
//!
//! - [`ArgumentParser`]: the parser contract
//! - [`ParserRegistry`]: parsers keyed by the type they produce
//! - [`parsers`]: stock parsers for strings, numbers, flags, UUIDs,
//!   enumerated names and delimited lists
//! - [`MinMax`]: bounds applied to list arguments
//! - [`CommandArguments`] and [`ArgumentResolver`]: per-invocation lookup
//!
//! Parsers degrade gracefully. Unknown names fall back to a default, bad
//! UUIDs become a sentinel, and out-of-range bounds are clamped. Only
//! unexpected failures, caught at a [`Guard`](tessera_core::Guard) boundary,
//! produce [`Outcome::Failed`](tessera_core::Outcome::Failed).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod arguments;
pub mod language;
pub mod parser;
pub mod parsers;
pub mod registry;
pub mod rule;
pub mod table;

pub use arguments::{ArgumentResolver, CommandArguments};
pub use language::Language;
pub use parser::{parser_fn, ArgumentParser, FnParser, SharedParser};
pub use parsers::{
    BoolParser, EnumParser, FromStrParser, LanguageParser, ListParser, StringParser, UuidParser,
    DEFAULT_DELIMITER,
};
pub use registry::{ParserDefaults, ParserRegistry};
pub use rule::{Bounds, MinMax};
pub use table::EnumTable;

//! Stock parsers.

pub mod enumerated;
pub mod list;
pub mod scalar;
pub mod uuid;

pub use self::enumerated::{EnumParser, LanguageParser};
pub use self::list::{ListParser, DEFAULT_DELIMITER};
pub use self::scalar::{BoolParser, FromStrParser, StringParser};
pub use self::uuid::UuidParser;

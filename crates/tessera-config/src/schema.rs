//! Configuration schema types.
//!
//! This module defines the structure of all configuration sections.

use serde::{Deserialize, Serialize};
use tessera_core::{ErrorReporter, Guard, ReportStyle};
use tessera_parse::{Language, ParserDefaults, DEFAULT_DELIMITER};
use tessera_telemetry::LogConfig;

/// Parsing configuration section.
///
/// Settings for the stock parsers.
///
/// # Example
///
/// ```
/// use tessera_config::ParsingConfig;
/// use tessera_parse::Language;
///
/// let config = ParsingConfig {
///     list_delimiter: ';',
///     default_language: Language::NlNl,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParsingConfig {
    /// Delimiter for list arguments.
    #[serde(default = "default_list_delimiter")]
    pub list_delimiter: char,

    /// Language used when a language code is not recognized.
    #[serde(default)]
    pub default_language: Language,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            list_delimiter: default_list_delimiter(),
            default_language: Language::default(),
        }
    }
}

impl ParsingConfig {
    /// Converts to parser defaults, with list conversions reported through
    /// `reporter`.
    #[must_use]
    pub fn to_parser_defaults(&self, reporter: ErrorReporter) -> ParserDefaults {
        ParserDefaults {
            list_delimiter: self.list_delimiter,
            default_language: self.default_language,
            guard: Guard::reporting(reporter),
        }
    }
}

fn default_list_delimiter() -> char {
    DEFAULT_DELIMITER
}

/// Log output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production).
    #[default]
    Json,
    /// Pretty format (for development).
    Pretty,
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level or filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include file and line number in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Converts to the telemetry crate's logging configuration.
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            json_format: self.format == LogFormat::Json,
            file_line_info: self.include_location,
            ..LogConfig::default()
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Error reporting configuration section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportingConfig {
    /// How much detail a failure report carries.
    #[serde(default)]
    pub style: ReportStyle,

    /// Render the cause chain of failed conversions.
    #[serde(default = "default_true")]
    pub include_causes: bool,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            style: ReportStyle::default(),
            include_causes: true,
        }
    }
}

impl ReportingConfig {
    /// Builds the reporter described by this section.
    #[must_use]
    pub fn to_reporter(&self) -> ErrorReporter {
        ErrorReporter::new(self.style).with_causes(self.include_causes)
    }
}

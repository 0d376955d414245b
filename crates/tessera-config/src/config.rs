//! Main configuration types.
//!
//! This module provides the top-level [`TesseraConfig`] struct and its builder.

use serde::{Deserialize, Serialize};
use tessera_parse::ParserDefaults;

use crate::{ConfigError, LogFormat, LoggingConfig, ParsingConfig, ReportingConfig};

/// Complete Tessera configuration.
///
/// This is the root configuration type that contains all configuration sections.
/// Use [`ConfigLoader`](crate::ConfigLoader) to load configuration from files
/// and environment variables.
///
/// # Example
///
/// ```
/// use tessera_config::TesseraConfig;
///
/// let config = TesseraConfig::default();
/// assert_eq!(config.parsing.list_delimiter, ',');
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct TesseraConfig {
    /// Stock parser settings.
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Failure reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

impl TesseraConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_config::{ParsingConfig, TesseraConfig};
    ///
    /// let config = TesseraConfig::builder()
    ///     .parsing(ParsingConfig {
    ///         list_delimiter: ';',
    ///         ..Default::default()
    ///     })
    ///     .build();
    ///
    /// assert_eq!(config.parsing.list_delimiter, ';');
    /// ```
    #[must_use]
    pub fn builder() -> TesseraConfigBuilder {
        TesseraConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - The list delimiter is alphanumeric or whitespace
    /// - The log level is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delimiter = self.parsing.list_delimiter;
        if delimiter.is_alphanumeric() || delimiter.is_whitespace() {
            return Err(ConfigError::invalid_value(
                "parsing.list_delimiter",
                format!("{delimiter:?} cannot separate list elements"),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid_value("logging.level", "must not be empty"));
        }

        Ok(())
    }

    /// Parser defaults for this configuration, reporting through the
    /// configured reporter.
    #[must_use]
    pub fn parser_defaults(&self) -> ParserDefaults {
        self.parsing.to_parser_defaults(self.reporting.to_reporter())
    }

    /// Create a development configuration preset.
    ///
    /// - Pretty log formatting with file/line info
    /// - Debug log level
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_config::TesseraConfig;
    ///
    /// let config = TesseraConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.include_location = true;

        config
    }

    /// Create a production configuration preset.
    ///
    /// - JSON log formatting
    /// - Info log level
    /// - Minimal single-line failure reports
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_config::TesseraConfig;
    ///
    /// let config = TesseraConfig::production();
    /// assert_eq!(config.logging.format, tessera_config::LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.reporting.style = tessera_core::ReportStyle::Minimal;

        config
    }
}

/// Builder for [`TesseraConfig`].
#[derive(Debug, Default)]
pub struct TesseraConfigBuilder {
    parsing: Option<ParsingConfig>,
    logging: Option<LoggingConfig>,
    reporting: Option<ReportingConfig>,
}

impl TesseraConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parsing configuration.
    #[must_use]
    pub fn parsing(mut self, parsing: ParsingConfig) -> Self {
        self.parsing = Some(parsing);
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Set the reporting configuration.
    #[must_use]
    pub fn reporting(mut self, reporting: ReportingConfig) -> Self {
        self.reporting = Some(reporting);
        self
    }

    /// Build the configuration.
    ///
    /// Any unset sections will use their default values.
    #[must_use]
    pub fn build(self) -> TesseraConfig {
        TesseraConfig {
            parsing: self.parsing.unwrap_or_default(),
            logging: self.logging.unwrap_or_default(),
            reporting: self.reporting.unwrap_or_default(),
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build_validated(self) -> Result<TesseraConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

//! Application bootstrap.
//!
//! [`Tessera`] bundles a validated configuration with a frozen parser
//! registry and the guard every resolution runs under.

use std::fmt;
use std::sync::Arc;

use tessera_config::{ConfigError, TesseraConfig};
use tessera_core::{ArgumentError, ArgumentResult, CommandValue, Guard, Outcome};
use tessera_parse::{ArgumentParser, ArgumentResolver, CommandArguments, ParserRegistry};
use tessera_telemetry::{init_logging, metrics, TelemetryError};
use thiserror::Error;

/// Errors raised while starting Tessera.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be installed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

type Registration = Box<dyn FnOnce(&mut ParserRegistry) + Send>;

/// Configured argument resolution for an application.
///
/// # Example
///
/// ```
/// use tessera::prelude::*;
///
/// let tessera = Tessera::builder(TesseraConfig::default())
///     .parser(parser_fn("Percent", |value: &CommandValue| {
///         Outcome::of_option(value.raw().trim_end_matches('%').parse::<u8>().ok())
///     }))
///     .build();
///
/// let args: CommandArguments = [CommandValue::new("volume", "80%")].into_iter().collect();
/// assert_eq!(tessera.require::<u8>(&args, "volume").ok(), Some(80));
/// ```
#[derive(Debug, Clone)]
pub struct Tessera {
    config: TesseraConfig,
    resolver: ArgumentResolver,
}

impl Tessera {
    /// Starts building an instance from `config`.
    #[must_use]
    pub fn builder(config: TesseraConfig) -> TesseraBuilder {
        TesseraBuilder::new(config)
    }

    /// Validates `config`, installs logging, registers metric descriptions
    /// and builds an instance with the stock parsers.
    ///
    /// # Errors
    ///
    /// Returns `BootstrapError` if the configuration is invalid or a global
    /// subscriber is already installed.
    pub fn init(config: TesseraConfig) -> Result<Self, BootstrapError> {
        config.validate()?;
        init_logging(&config.logging.to_log_config())?;
        metrics::describe_metrics();

        let tessera = Self::builder(config).build();
        tracing::info!(
            parsers = tessera.registry().len(),
            delimiter = %tessera.config.parsing.list_delimiter,
            "tessera initialized"
        );
        Ok(tessera)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TesseraConfig {
        &self.config
    }

    /// Returns the resolver.
    #[must_use]
    pub fn resolver(&self) -> &ArgumentResolver {
        &self.resolver
    }

    /// Returns the parser registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<ParserRegistry> {
        self.resolver.registry()
    }

    /// Returns the guard resolutions run under.
    #[must_use]
    pub fn guard(&self) -> &Guard {
        self.resolver.guard()
    }

    /// Parses a single value as `T`.
    pub fn resolve<T: 'static>(&self, value: &CommandValue) -> Outcome<T> {
        self.resolver.resolve(value)
    }

    /// Parses the argument under `key` as `T`.
    pub fn get<T: 'static>(&self, args: &CommandArguments, key: &str) -> Outcome<T> {
        args.get(key, &self.resolver)
    }

    /// Parses the argument under `key` as `T`, requiring it to be present.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentError::MissingArgument` if the argument is absent.
    pub fn require<T: 'static>(&self, args: &CommandArguments, key: &str) -> ArgumentResult<T> {
        args.require(key, &self.resolver)
    }
}

/// Builder for [`Tessera`].
///
/// The stock parsers are installed first, so parsers added here replace them
/// for the same output type.
pub struct TesseraBuilder {
    config: TesseraConfig,
    registrations: Vec<Registration>,
    handler: Option<tessera_core::ErrorHandler>,
}

impl TesseraBuilder {
    fn new(config: TesseraConfig) -> Self {
        Self {
            config,
            registrations: Vec::new(),
            handler: None,
        }
    }

    /// Adds a parser.
    #[must_use]
    pub fn parser<P: ArgumentParser>(mut self, parser: P) -> Self {
        self.registrations
            .push(Box::new(move |registry: &mut ParserRegistry| registry.register(parser)));
        self
    }

    /// Replaces the configured reporter with a custom error handler.
    #[must_use]
    pub fn error_handler(
        mut self,
        handler: impl Fn(&ArgumentError) + Send + Sync + 'static,
    ) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Freezes the registry and builds the instance.
    #[must_use]
    pub fn build(self) -> Tessera {
        let guard = match self.handler {
            Some(handler) => Guard::with_shared_handler(handler),
            None => Guard::reporting(self.config.reporting.to_reporter()),
        };

        let mut defaults = self.config.parser_defaults();
        defaults.guard = guard.clone();

        let mut registry = ParserRegistry::with_defaults(&defaults);
        for register in self.registrations {
            register(&mut registry);
        }

        Tessera {
            config: self.config,
            resolver: ArgumentResolver::with_guard(Arc::new(registry), guard),
        }
    }
}

impl fmt::Debug for TesseraBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TesseraBuilder")
            .field("config", &self.config)
            .field("pending_parsers", &self.registrations.len())
            .field("custom_handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tessera_config::{LoggingConfig, ParsingConfig};
    use tessera_parse::{parser_fn, Language};

    fn args(pairs: &[(&str, &str)]) -> CommandArguments {
        pairs.iter().map(|(k, v)| CommandValue::new(*k, *v)).collect()
    }

    #[test]
    fn test_build_installs_defaults() {
        let tessera = Tessera::builder(TesseraConfig::default()).build();
        assert_eq!(tessera.registry().len(), 10);
    }

    #[test]
    fn test_config_drives_stock_parsers() {
        let config = TesseraConfig::builder()
            .parsing(ParsingConfig {
                list_delimiter: ';',
                default_language: Language::DeDe,
            })
            .build();
        let tessera = Tessera::builder(config).build();
        let args = args(&[("names", "a;b;c"), ("lang", "??")]);

        assert_eq!(tessera.get::<Vec<String>>(&args, "names").value().map(Vec::len), Some(3));
        assert_eq!(tessera.get::<Language>(&args, "lang").into_option(), Some(Language::DeDe));
    }

    #[test]
    fn test_custom_parser_overrides_default() {
        let tessera = Tessera::builder(TesseraConfig::default())
            .parser(parser_fn("Shouting", |value: &CommandValue| {
                Outcome::of_value(value.raw().to_uppercase())
            }))
            .build();

        let parsed = tessera.resolve::<String>(&CommandValue::new("msg", "hi"));
        assert_eq!(parsed.into_option().as_deref(), Some("HI"));
        assert_eq!(tessera.registry().len(), 10);
    }

    #[test]
    fn test_custom_handler_sees_failures() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        let tessera = Tessera::builder(TesseraConfig::default())
            .error_handler(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        let outcome = tessera.resolve::<u16>(&CommandValue::new("port", "80"));
        assert!(outcome.is_failed());
        // Registry misses are not guard failures
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let config = TesseraConfig::builder()
            .logging(LoggingConfig {
                level: String::new(),
                ..Default::default()
            })
            .build();

        assert!(matches!(Tessera::init(config), Err(BootstrapError::Config(_))));
    }

    #[test]
    fn test_init_with_logging_disabled() {
        let config = TesseraConfig::builder()
            .logging(LoggingConfig {
                enabled: false,
                ..Default::default()
            })
            .build();

        let tessera = Tessera::init(config).unwrap();
        assert!(!tessera.config().logging.enabled);
    }

    #[test]
    fn test_require_reports_missing() {
        let tessera = Tessera::builder(TesseraConfig::default()).build();
        let err = tessera.require::<String>(&CommandArguments::new(), "target").unwrap_err();

        assert_eq!(err.error_code(), "MISSING_ARGUMENT");
    }
}

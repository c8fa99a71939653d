//! Environment-driven initialization of the `tracing` subscriber for binaries built on the models.
use serde::Deserialize;
use snafu::ResultExt;
use std::env;
use tracing::Subscriber;
use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, EnvFilter, Registry};

const DEFAULT_TRACING_FILTER_DIRECTIVE: LevelFilter = LevelFilter::INFO;

pub const TRACING_FILTER_DIRECTIVE_ENV_VAR: &str = "TRACING_FILTER_DIRECTIVE";
pub const LOGGING_FORMATTER_ENV_VAR: &str = "LOGGING_FORMATTER";
pub const LOGGING_ANSI_ENABLED_ENV_VAR: &str = "LOGGING_ANSI_ENABLED";

/// Controls the format of log messages and whether ANSI colors are emitted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct LogFormatter {
    message_format: MessageFormat,
    ansi_enabled: bool,
}

impl LogFormatter {
    pub fn try_from_env() -> Result<Self> {
        Self::from_settings(
            env::var(LOGGING_FORMATTER_ENV_VAR).ok().as_deref(),
            env::var(LOGGING_ANSI_ENABLED_ENV_VAR).ok().as_deref(),
        )
    }

    /// Builds a formatter from raw setting values. Unset values fall back to the defaults.
    pub fn from_settings(message_format: Option<&str>, ansi_enabled: Option<&str>) -> Result<Self> {
        let message_format = message_format
            .map(MessageFormat::from_setting)
            .transpose()?
            .unwrap_or_default();
        let ansi_enabled = ansi_enabled
            .map(|setting| {
                setting
                    .to_lowercase()
                    .parse::<bool>()
                    .context(error::LogAnsiEnvSnafu { env_value: setting })
            })
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            message_format,
            ansi_enabled,
        })
    }

    pub fn message_format(&self) -> MessageFormat {
        self.message_format
    }

    pub fn ansi_enabled(&self) -> bool {
        self.ansi_enabled
    }

    fn add_format_layer<S>(&self, event_subscriber: S) -> Box<dyn Subscriber + Send + Sync>
    where
        S: SubscriberExt + Send + Sync + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        // Each fmt layer is a distinct type, so the whole subscriber gets boxed per arm.
        match self.message_format {
            MessageFormat::Full => {
                Box::new(event_subscriber.with(fmt::layer().with_ansi(self.ansi_enabled)))
            }
            MessageFormat::Compact => {
                Box::new(event_subscriber.with(fmt::layer().compact().with_ansi(self.ansi_enabled)))
            }
            MessageFormat::Pretty => {
                Box::new(event_subscriber.with(fmt::layer().pretty().with_ansi(self.ansi_enabled)))
            }
            MessageFormat::Json => {
                Box::new(event_subscriber.with(fmt::layer().json().with_ansi(self.ansi_enabled)))
            }
        }
    }
}

/// The message format for logging tracing events.
///
/// See https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/format/index.html
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Human-readable, single-line logs for each event.
    Full,
    /// A variant of the default formatter optimized for short line lengths.
    Compact,
    #[default]
    /// Pretty-formatted multi-line logs optimized for human readability.
    Pretty,
    /// Newline-delimited JSON logs.
    Json,
}

impl MessageFormat {
    fn from_setting(setting: &str) -> Result<Self> {
        serde_plain::from_str(setting).context(error::LogFormatterEnvSnafu {
            env_value: setting,
        })
    }
}

pub fn init_telemetry_from_env() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(DEFAULT_TRACING_FILTER_DIRECTIVE.into())
        .with_env_var(TRACING_FILTER_DIRECTIVE_ENV_VAR)
        .from_env_lossy();

    let subscriber = Registry::default().with(env_filter);
    let subscriber = LogFormatter::try_from_env()?.add_format_layer(subscriber);

    tracing::subscriber::set_global_default(subscriber)
        .context(error::TracingConfigurationSnafu)?;

    Ok(())
}

pub mod error {
    use std::str::ParseBoolError;

    use super::*;
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub))]
    pub enum TelemetryConfigError {
        #[snafu(display("Error configuring tracing: '{}'", source))]
        TracingConfiguration {
            source: tracing::subscriber::SetGlobalDefaultError,
        },

        #[snafu(display(
            "Could not parse formatter from environment variable '{}={}': '{}'",
            LOGGING_FORMATTER_ENV_VAR,
            env_value,
            source
        ))]
        LogFormatterEnv {
            source: serde_plain::Error,
            env_value: String,
        },

        #[snafu(display(
            "Could not parse ANSI enablement from environment variable '{}={}': '{}'",
            LOGGING_ANSI_ENABLED_ENV_VAR,
            env_value,
            source
        ))]
        LogAnsiEnv {
            source: ParseBoolError,
            env_value: String,
        },
    }
}

type Result<T> = std::result::Result<T, TelemetryConfigError>;
pub use error::TelemetryConfigError;

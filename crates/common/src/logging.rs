//! Structured logging setup shared by the vault binaries.
//!
//! Contextual fields are plain tracing fields:
//! `info!(request_id = %id, "...")` or `error!(error = %err, "...")`.
//! The JSON format emits them as top-level keys next to `level` and `message`.

use crate::env::{get_string, EnvSource};
use crate::error::{Error, Result};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name; anything unrecognised falls back to `Info`.
    pub fn parse_lenient(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    fn as_filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl LogFormat {
    pub fn parse_lenient(format: &str) -> Self {
        match format.trim().to_lowercase().as_str() {
            "text" | "pretty" | "plain" => Self::Text,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Extra `EnvFilter` directives, e.g. `vault_server=debug`.
    pub directives: Option<String>,
}

impl LogConfig {
    /// Reads `LOG_LEVEL`, `LOG_FORMAT` and `RUST_LOG`.
    pub fn from_source<S: EnvSource + ?Sized>(src: &S) -> Self {
        let directives = get_string(src, "RUST_LOG", "");
        Self {
            level: LogLevel::parse_lenient(&get_string(src, "LOG_LEVEL", "info")),
            format: LogFormat::parse_lenient(&get_string(src, "LOG_FORMAT", "json")),
            directives: (!directives.is_empty()).then_some(directives),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level.as_filter().into())
            .parse_lossy(self.directives.as_deref().unwrap_or_default())
    }
}

/// Formatting layer writing to `writer`, filtered by the configured level.
pub fn layer<W>(config: &LogConfig, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = config.env_filter();
    match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_target(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
    }
}

/// Install the global subscriber writing to stdout.
pub fn init(config: &LogConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(layer(config, std::io::stdout))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

// ABOUTME: Logging configuration and structured logging setup for the planner
// ABOUTME: Configures log levels, formatters, and output destinations from the environment
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging with `tracing-subscriber`

use std::env;
use std::io;

use anyhow::Result;
use serde_json::json;
use stride_core::constants::service_names;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{
        self,
        format::{Compact, DefaultFields, FmtSpan, Format},
    },
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Where log lines go
    pub writer: LogWriter,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a format name, falling back to `Pretty`
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Log destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogWriter {
    /// Standard output
    Stdout,
    /// Standard error, keeps stdout free for command output
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            writer: LogWriter::Stdout,
            service_name: service_names::STRIDE_PLANNER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_str_or_default(&value));

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            writer: LogWriter::Stdout,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::STRIDE_PLANNER.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Send log lines to the given destination
    #[must_use]
    pub fn with_writer(mut self, writer: LogWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Build the env filter with noise reduction for HTTP dependencies
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        EnvFilter::new(base)
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
            .add_directive(
                "reqwest=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
            .add_directive(
                "rustls=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
            // Keep our application logs at desired level
            .add_directive(
                format!("stride_planner={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::INFO.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match (self.format, self.writer) {
            (LogFormat::Json, LogWriter::Stdout) => registry
                .with(self.full_layer().json().with_writer(io::stdout))
                .try_init()?,
            (LogFormat::Json, LogWriter::Stderr) => registry
                .with(self.full_layer().json().with_writer(io::stderr))
                .try_init()?,
            (LogFormat::Pretty, LogWriter::Stdout) => registry
                .with(self.full_layer().with_writer(io::stdout))
                .try_init()?,
            (LogFormat::Pretty, LogWriter::Stderr) => registry
                .with(self.full_layer().with_writer(io::stderr))
                .try_init()?,
            (LogFormat::Compact, LogWriter::Stdout) => registry
                .with(compact_layer().with_writer(io::stdout))
                .try_init()?,
            (LogFormat::Compact, LogWriter::Stderr) => registry
                .with(compact_layer().with_writer(io::stderr))
                .try_init()?,
        }

        self.log_startup_info();
        Ok(())
    }

    fn full_layer<S>(&self) -> fmt::Layer<S> {
        fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Stride planner starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread
                }
            }
        });

        info!("Configuration loaded: {}", config_summary);
    }
}

fn compact_layer<S>() -> fmt::Layer<S, DefaultFields, Format<Compact>> {
    fmt::layer()
        .compact()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default().with_writer(LogWriter::Stderr);
        assert_eq!(config.service_name, "stride-planner");
        assert_eq!(config.writer, LogWriter::Stderr);
        assert_eq!(config.format, LogFormat::Pretty);
    }
}

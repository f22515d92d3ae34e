//! Log subscriber setup and redaction of sensitive values.

use std::{env, sync::LazyLock};
use tracing_subscriber::{EnvFilter, fmt};

/// How log lines are written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            default_filter: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        let format = match env::var("LOG_FORMAT") {
            Ok(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            format,
            ..Self::default()
        }
    }
}

/// Install the global subscriber
pub fn init_tracing(config: &LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))?;

    match config.format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init()?,
        LogFormat::Pretty => fmt().with_env_filter(filter).try_init()?,
    }

    tracing::info!(
        format = ?config.format,
        version = env!("CARGO_PKG_VERSION"),
        "logging initialized"
    );
    Ok(())
}

static SENSITIVE_PATTERNS: LazyLock<Vec<(regex::Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r#"(?i)"(password|token|secret|authorization)"\s*:\s*"[^"]*""#,
            r#""$1": "[REDACTED]""#,
        ),
        (r"(?i)\bbearer\s+[A-Za-z0-9._~+/=-]+", "Bearer [REDACTED]"),
        (r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b", "[EMAIL]"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| {
        regex::Regex::new(pattern)
            .ok()
            .map(|re| (re, replacement))
    })
    .collect()
});

/// Redact credentials and email addresses before a message is logged
pub fn redact_sensitive_data(input: &str) -> String {
    SENSITIVE_PATTERNS
        .iter()
        .fold(input.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

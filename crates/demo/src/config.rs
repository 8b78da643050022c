//! Demo configuration

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Filter used when neither `RUST_LOG` nor `ROSTER_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "roster_demo=info,roster_domain=debug";

/// How the scenario report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown output format '{other}' (expected 'text' or 'json')"),
        }
    }
}

/// Demo configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Report format
    pub output: OutputFormat,
}

impl DemoConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            log_filter: lookup("ROSTER_LOG")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            output: lookup("ROSTER_OUTPUT")
                .map(|s| s.parse::<OutputFormat>())
                .transpose()
                .context("ROSTER_OUTPUT must be 'text' or 'json'")?
                .unwrap_or_default(),
        })
    }
}

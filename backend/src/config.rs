//! Environment configuration for the remote indicator API.

use std::{env, time::Duration};

use anyhow::Context;
use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: &str = "30";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = load_or_default(&lookup, "INDICATOR_API_URL", DEFAULT_API_URL);
        let timeout_secs = load_or_default(&lookup, "INDICATOR_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
            .trim()
            .parse::<u64>()
            .context("INDICATOR_API_TIMEOUT_SECS must be a whole number of seconds")?;
        let token = lookup("INDICATOR_API_TOKEN").filter(|t| !t.trim().is_empty());
        if token.is_none() {
            warn!("INDICATOR_API_TOKEN not set, calling the indicator API without authorization");
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn load_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

use crate::error::ConsoleError;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const BASE_URL_VAR: &str = "WORKFLOW_API_URL";
const TIMEOUT_VAR: &str = "WORKFLOW_API_TIMEOUT_SECS";

/// Backend location and transport settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ConsoleConfig {
    pub fn new(base_url: &str) -> Result<Self, ConsoleError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Reads `WORKFLOW_API_URL` and `WORKFLOW_API_TIMEOUT_SECS`, falling back to defaults.
    /// Call `dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConsoleError> {
        let base = std::env::var(BASE_URL_VAR).ok();
        let timeout = std::env::var(TIMEOUT_VAR).ok();
        Self::from_values(base.as_deref(), timeout.as_deref())
    }

    fn from_values(base: Option<&str>, timeout: Option<&str>) -> Result<Self, ConsoleError> {
        let base_url = parse_base_url(base.unwrap_or(DEFAULT_BASE_URL))?;
        let timeout = match timeout {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    let msg = format!("{TIMEOUT_VAR} must be a whole number of seconds: {e}");
                    ConsoleError::Config(msg)
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        Ok(Self { base_url, timeout })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConsoleError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ConsoleError> {
        self.base_url.join(path).map_err(|e| {
            let msg = format!("cannot join '{path}' onto {}: {e}", self.base_url);
            ConsoleError::Config(msg)
        })
    }
}

// A trailing slash keeps `Url::join` from dropping the last path segment.
fn parse_base_url(raw: &str) -> Result<Url, ConsoleError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&normalized).map_err(|e| {
        let msg = format!("invalid base url '{trimmed}': {e}");
        ConsoleError::Config(msg)
    })?;
    if url.cannot_be_a_base() {
        let msg = format!("'{trimmed}' cannot be used as a base url");
        return Err(ConsoleError::Config(msg));
    }
    Ok(url)
}

use crate::error::DaoError;
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const API_URL_VAR: &str = "INNKEEPER_API_URL";
const TIMEOUT_VAR: &str = "INNKEEPER_API_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DaoError> {
        let mut base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(DaoError::Config(format!("{} cannot be used as a base URL", base_url)));
        }
        // keep the last path segment when joining endpoint paths
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url, timeout })
    }

    pub fn from_env() -> Result<Self, DaoError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DaoError> {
        let base_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "{} is not a number of seconds, using default", TIMEOUT_VAR);
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };
        Self::new(&base_url, Duration::from_secs(timeout_secs))
    }

    /// Absolute URL for an endpoint path such as `rooms/42`.
    pub fn endpoint(&self, path: &str) -> Result<Url, DaoError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

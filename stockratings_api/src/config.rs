//! Process-wide client configuration.
//!
//! The base URL is read once at startup and handed to [`crate::Client::new`];
//! the client never consults the environment on its own.

use crate::Error;

/// Environment variable holding the API base URL, e.g. `http://localhost:8080`.
pub const API_URL_VAR: &str = "API_URL";

/// Settings needed to reach the ratings API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Prefix joined verbatim with every request path.
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads [`API_URL_VAR`] from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_URL_VAR) {
            Some(value) if !value.trim().is_empty() => Ok(Self::new(value.trim())),
            _ => {
                tracing::error!("{} is not set", API_URL_VAR);
                Err(Error::MissingConfig(API_URL_VAR))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lookup_reads_base_url() {
        let config =
            Config::from_lookup(|key| (key == "API_URL").then(|| "http://localhost:8080".into()))
                .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn from_lookup_missing_is_error() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, Error::MissingConfig("API_URL")));
    }

    #[test]
    fn from_lookup_blank_is_error() {
        let err = Config::from_lookup(|_| Some("   ".to_string())).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(_)));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(Config::new("http://api.test/").base_url, "http://api.test");
    }
}

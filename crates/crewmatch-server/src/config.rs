//! Server configuration.

use std::path::PathBuf;

use tracing::warn;

/// Server configuration.
pub struct Config {
    /// HTTP server bind address.
    pub bind_addr: String,

    /// Path to a JSON dataset file. When unset, the demo dataset is used.
    pub dataset_path: Option<PathBuf>,

    /// Endpoint assignments are committed to. When unset, commits are
    /// recorded to the log.
    pub commit_endpoint: Option<String>,

    /// Request timeout for the commit endpoint (seconds).
    pub commit_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "[::1]:8740".to_string(),
            dataset_path: None,
            commit_endpoint: None,
            commit_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Build a configuration from the environment, falling back to defaults.
    ///
    /// Recognised variables: `CREWMATCH_ADDR`, `CREWMATCH_DATASET`,
    /// `CREWMATCH_COMMIT_URL`, `CREWMATCH_COMMIT_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = std::env::var("CREWMATCH_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(path) = std::env::var("CREWMATCH_DATASET") {
            config.dataset_path = Some(PathBuf::from(path));
        }
        if let Ok(endpoint) = std::env::var("CREWMATCH_COMMIT_URL") {
            config.commit_endpoint = Some(endpoint);
        }
        if let Ok(secs) = std::env::var("CREWMATCH_COMMIT_TIMEOUT_SECS") {
            match secs.parse() {
                Ok(secs) => config.commit_timeout_secs = secs,
                Err(_) => warn!(
                    value = %secs,
                    default = config.commit_timeout_secs,
                    "Invalid CREWMATCH_COMMIT_TIMEOUT_SECS - using default"
                ),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_timeout_falls_back_to_default() {
        std::env::set_var("CREWMATCH_COMMIT_TIMEOUT_SECS", "soon");
        let config = Config::from_env();
        assert_eq!(config.commit_timeout_secs, 30);
        std::env::remove_var("CREWMATCH_COMMIT_TIMEOUT_SECS");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "[::1]:8740");
        assert!(config.dataset_path.is_none());
        assert!(config.commit_endpoint.is_none());
        assert_eq!(config.commit_timeout_secs, 30);
    }
}

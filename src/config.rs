//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_MAP_PORT: u16 = 11200;
const DEFAULT_LRU_PORT: u16 = 11201;
const DEFAULT_LRU_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => unreachable!(),
};
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port serving the unbounded map backend
    pub map_port: u16,
    /// Port serving the LRU backend
    pub lru_port: u16,
    /// Maximum number of entries the LRU backend holds
    pub lru_capacity: NonZeroUsize,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAP_PORT` - Map backend port (default: 11200)
    /// - `LRU_PORT` - LRU backend port (default: 11201)
    /// - `LRU_CAPACITY` - LRU capacity, must be at least 1 (default: 100)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            map_port: parse_env("MAP_PORT").unwrap_or(DEFAULT_MAP_PORT),
            lru_port: parse_env("LRU_PORT").unwrap_or(DEFAULT_LRU_PORT),
            lru_capacity: parse_env("LRU_CAPACITY").unwrap_or(DEFAULT_LRU_CAPACITY),
            request_timeout: parse_env("REQUEST_TIMEOUT").unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_port: DEFAULT_MAP_PORT,
            lru_port: DEFAULT_LRU_PORT,
            lru_capacity: DEFAULT_LRU_CAPACITY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

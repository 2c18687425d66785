//! Endpoint configuration for the posts feed.
//!
//! Values come from `FEED_`-prefixed environment variables; anything unset
//! falls back to the public placeholder endpoint.

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_POSTS_PATH: &str = "posts";
const ENV_PREFIX: &str = "FEED_";

/// Where the web service sends its request.
///
/// The target is validated lazily, on each fetch, so a bad base URL surfaces as
/// a fetch failure rather than a construction failure.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeedConfig {
    /// `FEED_BASE_URL`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `FEED_POSTS_PATH`
    #[serde(default = "default_posts_path")]
    pub posts_path: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            posts_path: default_posts_path(),
        }
    }
}

impl FeedConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Load from an explicit set of `(name, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_posts_path() -> String {
    DEFAULT_POSTS_PATH.to_string()
}

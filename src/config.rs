//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Default mount point for the posts routes.
pub const DEFAULT_API_PREFIX: &str = "/api/posts";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path the posts router is mounted under (empty means the root)
    pub api_prefix: String,
    /// Whether to start with a couple of demo posts
    pub seed_posts: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `API_PREFIX` - Mount point for the posts routes (default: `/api/posts`)
    /// - `SEED_POSTS` - `true` or `1` to seed demo posts (default: false)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            api_prefix: env::var("API_PREFIX")
                .map(|v| normalize_prefix(&v))
                .unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()),
            seed_posts: env::var("SEED_POSTS")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            seed_posts: false,
        }
    }
}

/// Normalizes a mount prefix to `/segment[/segment...]` with no trailing slash.
///
/// Returns an empty string when the prefix designates the root.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

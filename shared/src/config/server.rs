//! Server configuration module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the server binds to, `host:port`
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Request read/write timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Keep-alive (idle) timeout in seconds
    #[serde(default = "default_timeout")]
    pub idle_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            workers: 0, // Use all CPU cores
            timeout: default_timeout(),
            idle_timeout: default_timeout(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            ..Default::default()
        }
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn idle_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.idle_timeout)
    }
}

fn default_bind_addr() -> String {
    String::from("0.0.0.0:8080")
}

fn default_timeout() -> u64 {
    30
}

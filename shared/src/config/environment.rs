//! Environment configuration module

use serde::{Deserialize, Serialize};

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Developer machine
    #[default]
    Local,
    /// Shared development deployment
    Dev,
    /// Production deployment
    Prod,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "local"),
            Environment::Dev => write!(f, "dev"),
            Environment::Prod => write!(f, "prod"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" | "development" => Ok(Environment::Dev),
            "prod" | "production" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,

    /// Log output format
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Create logging config for environment
    ///
    /// Local runs get human-readable debug output; deployed environments
    /// emit JSON lines.
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Local => Self {
                level: String::from("debug"),
                format: LogFormat::Pretty,
            },
            Environment::Dev => Self {
                level: String::from("debug"),
                format: LogFormat::Json,
            },
            Environment::Prod => Self {
                level: String::from("info"),
                format: LogFormat::Json,
            },
        }
    }
}

/// Log format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Dev);
        assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Prod);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_display_round_trips() {
        for env in [Environment::Local, Environment::Dev, Environment::Prod] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn test_logging_config_for_environment() {
        let local = LoggingConfig::for_environment(Environment::Local);
        assert_eq!(local.level, "debug");
        assert_eq!(local.format, LogFormat::Pretty);

        let dev = LoggingConfig::for_environment(Environment::Dev);
        assert_eq!(dev.level, "debug");
        assert_eq!(dev.format, LogFormat::Json);

        let prod = LoggingConfig::for_environment(Environment::Prod);
        assert_eq!(prod.level, "info");
        assert_eq!(prod.format, LogFormat::Json);
    }
}

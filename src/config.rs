use std::env;
use std::time::Duration;

use crate::error::RelayError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Downstream endpoint for merged-PR payloads. `None` keeps forwarding off.
    pub forward_url: Option<String>,
    pub http_timeout: Duration,
    pub github_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| RelayError::Config(format!("invalid PORT: {:?}", raw)))?,
            None => DEFAULT_PORT,
        };

        let http_timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                RelayError::Config(format!("invalid HTTP_TIMEOUT_SECS: {:?}", raw))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let forward_enabled = lookup("FORWARD_ENABLED")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let forward_url = if forward_enabled {
            match lookup("FORWARD_URL").filter(|url| !url.trim().is_empty()) {
                Some(url) => Some(url),
                None => {
                    return Err(RelayError::Config(
                        "FORWARD_ENABLED is set but FORWARD_URL is missing".to_string(),
                    ))
                }
            }
        } else {
            None
        };

        let github_token = lookup("GITHUB_TOKEN").filter(|t| !t.is_empty());

        Ok(Config {
            port,
            forward_url,
            http_timeout: Duration::from_secs(http_timeout_secs),
            github_token,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, RelayError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.forward_url, None);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.github_token, None);
    }

    #[test]
    fn reads_port_and_timeout() {
        let config = config_from(&[("PORT", "8080"), ("HTTP_TIMEOUT_SECS", "3")]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_unparseable_port() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn forward_url_ignored_unless_enabled() {
        let config = config_from(&[("FORWARD_URL", "https://myserver.com/hook")]).unwrap();
        assert_eq!(config.forward_url, None);
    }

    #[test]
    fn forward_enabled_with_url() {
        let config = config_from(&[
            ("FORWARD_ENABLED", "TRUE"),
            ("FORWARD_URL", "https://myserver.com/hook"),
        ])
        .unwrap();

        assert_eq!(
            config.forward_url.as_deref(),
            Some("https://myserver.com/hook")
        );
    }

    #[test]
    fn only_true_one_and_yes_enable_forwarding() {
        for value in ["on", "enabled", "false", "0", ""] {
            let config = config_from(&[
                ("FORWARD_ENABLED", value),
                ("FORWARD_URL", "https://myserver.com/hook"),
            ])
            .unwrap();
            assert_eq!(config.forward_url, None, "FORWARD_ENABLED={:?}", value);
        }

        for value in ["1", "true", "Yes"] {
            let config = config_from(&[
                ("FORWARD_ENABLED", value),
                ("FORWARD_URL", "https://myserver.com/hook"),
            ])
            .unwrap();
            assert!(config.forward_url.is_some(), "FORWARD_ENABLED={:?}", value);
        }
    }

    #[test]
    fn forward_enabled_without_url_is_an_error() {
        let err = config_from(&[("FORWARD_ENABLED", "1")]).unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn empty_github_token_is_treated_as_unset() {
        let config = config_from(&[("GITHUB_TOKEN", "")]).unwrap();
        assert_eq!(config.github_token, None);
    }
}

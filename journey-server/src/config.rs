//! Process configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `BIND_ADDR` | `0.0.0.0:8000` |
//! | `TFL_APP_ID`, `TFL_APP_KEY` | unset (anonymous, rate limited) |
//! | `TFL_BASE_URL` | `https://api.tfl.gov.uk` |
//! | `TFL_TIMEOUT_SECS` | `15` |
//! | `TFL_MODES` | `tube,dlr,overground,tram,national-rail,bus` |
//! | `OLLAMA_ENABLED` | `true` |
//! | `OLLAMA_HOST` | `http://localhost:11434` |
//! | `OLLAMA_MODEL` | `llama2:7b` |
//! | `OLLAMA_TIMEOUT_SECS` | `45` |

use std::net::SocketAddr;

use crate::domain::ModeSet;
use crate::explain::OllamaConfig;
use crate::planner::PlannerConfig;
use crate::tfl::TflConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Error returned for an unparseable variable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {message}")]
pub struct ConfigError {
    var: &'static str,
    message: String,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// TfL client settings
    pub tfl: TflConfig,
    /// Planner settings
    pub planner: PlannerConfig,
    /// Ollama settings; `None` disables AI analysis
    pub ollama: Option<OllamaConfig>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError {
                var: "BIND_ADDR",
                message: e.to_string(),
            })?;

        let mut tfl = TflConfig::new();
        if let Some(url) = get("TFL_BASE_URL") {
            tfl = tfl.with_base_url(url);
        }
        if let (Some(id), Some(key)) = (get("TFL_APP_ID"), get("TFL_APP_KEY")) {
            tfl = tfl.with_credentials(id, key);
        }
        if let Some(secs) = get("TFL_TIMEOUT_SECS") {
            tfl = tfl.with_timeout(parse_secs("TFL_TIMEOUT_SECS", &secs)?);
        }

        let mut planner = PlannerConfig::default();
        if let Some(modes) = get("TFL_MODES") {
            planner.modes = ModeSet::parse_list(&modes).map_err(|e| ConfigError {
                var: "TFL_MODES",
                message: e.to_string(),
            })?;
        }

        let ollama_enabled = match get("OLLAMA_ENABLED") {
            Some(v) => parse_bool(&v).ok_or_else(|| ConfigError {
                var: "OLLAMA_ENABLED",
                message: format!("expected true or false, got {v:?}"),
            })?,
            None => true,
        };

        let ollama = if ollama_enabled {
            let defaults = OllamaConfig::default();
            let mut ollama = OllamaConfig::new(
                get("OLLAMA_HOST").unwrap_or(defaults.host),
                get("OLLAMA_MODEL").unwrap_or(defaults.model),
            );
            if let Some(secs) = get("OLLAMA_TIMEOUT_SECS") {
                ollama = ollama.with_timeout(parse_secs("OLLAMA_TIMEOUT_SECS", &secs)?);
            }
            Some(ollama)
        } else {
            None
        };

        Ok(Self {
            bind_addr,
            tfl,
            planner,
            ollama,
        })
    }
}

fn parse_secs(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|e| ConfigError {
        var,
        message: e.to_string(),
    })
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.tfl.base_url, "https://api.tfl.gov.uk");
        assert_eq!(config.tfl.credentials(), None);
        assert_eq!(config.planner.modes, ModeSet::default());

        let ollama = config.ollama.unwrap();
        assert_eq!(ollama.host, "http://localhost:11434");
        assert_eq!(ollama.model, "llama2:7b");
        assert_eq!(ollama.timeout_secs, 45);
    }

    #[test]
    fn credentials_need_both_halves() {
        let id_only = config(&[("TFL_APP_ID", "my-app")]).unwrap();
        assert_eq!(id_only.tfl.credentials(), None);

        let both = config(&[("TFL_APP_ID", "my-app"), ("TFL_APP_KEY", "secret")]).unwrap();
        assert_eq!(both.tfl.credentials(), Some(("my-app", "secret")));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config(&[("TFL_APP_ID", ""), ("TFL_APP_KEY", " "), ("BIND_ADDR", "")]).unwrap();
        assert_eq!(config.tfl.credentials(), None);
        assert_eq!(config.bind_addr.port(), 8000);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("TFL_BASE_URL", "http://localhost:9000"),
            ("TFL_TIMEOUT_SECS", "30"),
            ("TFL_MODES", "tube,bus"),
            ("OLLAMA_HOST", "http://gpu-box:11434"),
            ("OLLAMA_MODEL", "mistral"),
            ("OLLAMA_TIMEOUT_SECS", "90"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.tfl.base_url, "http://localhost:9000");
        assert_eq!(config.tfl.timeout_secs, 30);
        assert_eq!(config.planner.modes.to_query(), "tube,bus");

        let ollama = config.ollama.unwrap();
        assert_eq!(ollama.host, "http://gpu-box:11434");
        assert_eq!(ollama.model, "mistral");
        assert_eq!(ollama.timeout_secs, 90);
    }

    #[test]
    fn ollama_can_be_disabled() {
        assert!(config(&[("OLLAMA_ENABLED", "false")]).unwrap().ollama.is_none());
        assert!(config(&[("OLLAMA_ENABLED", "0")]).unwrap().ollama.is_none());
        assert!(config(&[("OLLAMA_ENABLED", "yes")]).unwrap().ollama.is_some());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = config(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid value for BIND_ADDR"));

        let err = config(&[("TFL_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid value for TFL_TIMEOUT_SECS"));

        let err = config(&[("OLLAMA_TIMEOUT_SECS", "-1")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid value for OLLAMA_TIMEOUT_SECS"));

        let err = config(&[("TFL_MODES", "tube,hovercraft")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for TFL_MODES: unknown transport mode: hovercraft"
        );

        assert!(config(&[("OLLAMA_ENABLED", "maybe")]).is_err());
    }
}

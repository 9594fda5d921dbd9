//! Runtime configuration from the environment

use std::env;

pub const LOG_VAR: &str = "CC_UNITS_LOG";
pub const PRETTY_VAR: &str = "CC_UNITS_PRETTY";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Pretty-print JSON responses (interactive use only, breaks one-line framing)
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            pretty: false,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_filter: lookup(LOG_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
            pretty: lookup(PRETTY_VAR).map(|v| parse_flag(&v)).unwrap_or(defaults.pretty),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup_in(&[]));
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter, "info");
        assert!(!config.pretty);
    }

    #[test]
    fn test_from_vars() {
        let config = CliConfig::from_lookup(lookup_in(&[(LOG_VAR, "cc_units=trace"), (PRETTY_VAR, "TRUE")]));
        assert_eq!(config.log_filter, "cc_units=trace");
        assert!(config.pretty);
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = CliConfig::from_lookup(lookup_in(&[(LOG_VAR, "  "), (PRETTY_VAR, "0")]));
        assert_eq!(config.log_filter, "info");
        assert!(!config.pretty);
    }
}

use std::env;
use std::path::PathBuf;

pub const RESULT_DIRECTORY_ENV: &str = "RESULT_DIRECTORY";
pub const TCP_LINK_SPEED_ENV: &str = "TCP_LINK_SPEED_GBPS";

pub const DEFAULT_RESULT_DIRECTORY: &str = "results";
pub const DEFAULT_TCP_LINK_SPEED_GBPS: u32 = 10;

/// Tool configuration resolved from the process environment. Unset or
/// malformed values silently fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphsConfig {
    pub result_directory: PathBuf,
    pub tcp_link_speed_gbps: u32,
}

impl GraphsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let result_directory = lookup(RESULT_DIRECTORY_ENV)
            .unwrap_or_else(|| DEFAULT_RESULT_DIRECTORY.to_string())
            .into();
        let tcp_link_speed_gbps = lookup(TCP_LINK_SPEED_ENV)
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_TCP_LINK_SPEED_GBPS);
        Self {
            result_directory,
            tcp_link_speed_gbps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn given_empty_environment_should_use_defaults() {
        let config = GraphsConfig::from_lookup(|_| None);
        assert_eq!(config.result_directory, Path::new("results"));
        assert_eq!(config.tcp_link_speed_gbps, 10);
    }

    #[test]
    fn should_pick_up_configured_values() {
        let config = GraphsConfig::from_lookup(|key| match key {
            RESULT_DIRECTORY_ENV => Some("/tmp/bench-results".to_string()),
            TCP_LINK_SPEED_ENV => Some("100".to_string()),
            _ => None,
        });
        assert_eq!(config.result_directory, Path::new("/tmp/bench-results"));
        assert_eq!(config.tcp_link_speed_gbps, 100);
    }

    #[test]
    fn non_numeric_link_speed_should_fall_back_to_default() {
        let config = GraphsConfig::from_lookup(|key| match key {
            TCP_LINK_SPEED_ENV => Some("fast".to_string()),
            _ => None,
        });
        assert_eq!(config.tcp_link_speed_gbps, 10);
    }
}

//! Runtime settings for the binary. Only logging is configurable; the token is baked in.

use std::str::FromStr;

use log::LevelFilter;

/// Environment variable holding the log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL_VAR: &str = "LINK_DECODER_LOG";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    /// Set when the configured level could not be parsed and the default was used.
    pub rejected_log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            rejected_log_level: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(LOG_LEVEL_VAR) else {
            return Self::default();
        };
        match LevelFilter::from_str(raw.trim()) {
            Ok(log_level) => Self {
                log_level,
                rejected_log_level: None,
            },
            Err(_) => Self {
                log_level: DEFAULT_LOG_LEVEL,
                rejected_log_level: Some(raw),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, LOG_LEVEL_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn defaults_to_warn_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup_with(None)), AppConfig::default());
        assert_eq!(AppConfig::default().log_level, LevelFilter::Warn);
    }

    #[test]
    fn parses_level_case_insensitively() {
        let config = AppConfig::from_lookup(lookup_with(Some(" DEBUG ")));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.rejected_log_level, None);

        let config = AppConfig::from_lookup(lookup_with(Some("off")));
        assert_eq!(config.log_level, LevelFilter::Off);
    }

    #[test]
    fn falls_back_on_unknown_level() {
        let config = AppConfig::from_lookup(lookup_with(Some("loud")));
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.rejected_log_level.as_deref(), Some("loud"));
    }
}

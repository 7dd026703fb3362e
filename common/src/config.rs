//! Settings read from environment variables.

use tracing::{Level, warn};

use crate::search_const::DEFAULT_PAGE_SIZE;
use crate::url_codec::UrlCodec;

pub const PAGE_SIZE_VAR: &str = "KESSLER_PAGE_SIZE";
pub const LOG_LEVEL_VAR: &str = "KESSLER_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub default_page_size: u64,
    pub log_level: Level,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            log_level: Level::INFO,
        }
    }
}

impl SearchConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Reads values baked in at compile time; wasm builds have no process
    /// environment.
    pub fn from_build_env() -> Self {
        let vars = [
            (PAGE_SIZE_VAR, option_env!("KESSLER_PAGE_SIZE")),
            (LOG_LEVEL_VAR, option_env!("KESSLER_LOG_LEVEL")),
        ];
        Self::from_vars(vars.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))))
    }

    /// Unset or unparsable values keep their defaults.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                PAGE_SIZE_VAR => match value.parse::<u64>() {
                    Ok(size) if size > 0 => config.default_page_size = size,
                    _ => warn!(value, "invalid {PAGE_SIZE_VAR}, keeping {}", config.default_page_size),
                },
                LOG_LEVEL_VAR => match value.parse::<Level>() {
                    Ok(level) => config.log_level = level,
                    Err(_) => warn!(value, "invalid {LOG_LEVEL_VAR}, keeping {}", config.log_level),
                },
                _ => {}
            }
        }
        config
    }

    pub fn codec(&self) -> UrlCodec {
        UrlCodec::new(self.default_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_vars_and_ignores_others() {
        let config = SearchConfig::from_vars([
            ("KESSLER_PAGE_SIZE", "25"),
            ("KESSLER_LOG_LEVEL", "debug"),
            ("HOME", "/root"),
        ]);
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.codec().default_limit, 25);
    }

    #[test]
    fn environment_readers_agree_with_from_vars() {
        assert_eq!(SearchConfig::from_env(), SearchConfig::from_vars(std::env::vars()));
        let built = SearchConfig::from_build_env();
        assert!(built.default_page_size > 0);
        match option_env!("KESSLER_PAGE_SIZE").and_then(|v| v.trim().parse::<u64>().ok()) {
            Some(size) if size > 0 => assert_eq!(built.default_page_size, size),
            _ => assert_eq!(built.default_page_size, DEFAULT_PAGE_SIZE),
        }
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = SearchConfig::from_vars([("KESSLER_PAGE_SIZE", "0"), ("KESSLER_LOG_LEVEL", "loud")]);
        assert_eq!(config, SearchConfig::default());
        let config = SearchConfig::from_vars([("KESSLER_PAGE_SIZE", "-3")]);
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
    }
}

//! crates/logging/src/config.rs
//! Start-up configuration and environment loading.

use crate::levels::{Level, LevelSpec, rank_of};
use crate::theme::{DEFAULT_THEME, ThemeStore};

/// Environment variable holding the initial default threshold (rank or level name).
pub const LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable holding the initial theme name.
pub const THEME_ENV: &str = "LOG_THEME";

/// Initial logger configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Threshold of the `default` namespace.
    pub default_level: LevelSpec,
    /// Theme activated at start.
    pub theme: String,
    /// Whether records start with a timestamp.
    pub timestamps: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            default_level: Level::Info.into(),
            theme: DEFAULT_THEME.to_owned(),
            timestamps: true,
        }
    }
}

impl LoggerConfig {
    /// Reads [`LEVEL_ENV`] and [`THEME_ENV`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// Unset or empty variables keep their defaults. Values that do not name a
    /// level or a built-in theme are ignored with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LEVEL_ENV).filter(|value| !value.trim().is_empty()) {
            let spec = LevelSpec::parse(&raw);
            match rank_of(&spec) {
                Ok(_) => config.default_level = spec,
                Err(error) => {
                    tracing::warn!(target: "logging::config", %error, "ignoring {LEVEL_ENV}");
                }
            }
        }

        if let Some(raw) = lookup(THEME_ENV).filter(|value| !value.trim().is_empty()) {
            let name = raw.trim();
            if ThemeStore::new().get(name).is_some() {
                config.theme = name.to_owned();
            } else {
                tracing::warn!(target: "logging::config", theme = name, "ignoring unknown {THEME_ENV}");
            }
        }

        config
    }

    /// Sets the default threshold.
    #[must_use]
    pub fn with_default_level(mut self, level: impl Into<LevelSpec>) -> Self {
        self.default_level = level.into();
        self
    }

    /// Sets the initial theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Enables or disables timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_are_info_light_with_timestamps() {
        let config = LoggerConfig::default();
        assert_eq!(config.default_level, LevelSpec::Rank(3));
        assert_eq!(config.theme, "light");
        assert!(config.timestamps);
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        assert_eq!(LoggerConfig::from_lookup(lookup(&[])), LoggerConfig::default());
    }

    #[test]
    fn numeric_level_is_a_rank() {
        let config = LoggerConfig::from_lookup(lookup(&[(LEVEL_ENV, "5")]));
        assert_eq!(config.default_level, LevelSpec::Rank(5));
    }

    #[test]
    fn named_level_is_kept_as_name() {
        let config = LoggerConfig::from_lookup(lookup(&[(LEVEL_ENV, "warn")]));
        assert_eq!(config.default_level, LevelSpec::Name("warn".to_owned()));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = LoggerConfig::from_lookup(lookup(&[
            (LEVEL_ENV, "loud"),
            (THEME_ENV, "neon"),
        ]));
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn theme_is_trimmed() {
        let config = LoggerConfig::from_lookup(lookup(&[(THEME_ENV, " dark ")]));
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn builders_override_fields() {
        let config = LoggerConfig::default()
            .with_default_level("silly")
            .with_theme("dark")
            .with_timestamps(false);
        assert_eq!(config.default_level, LevelSpec::Name("silly".to_owned()));
        assert_eq!(config.theme, "dark");
        assert!(!config.timestamps);
    }
}

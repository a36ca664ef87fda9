use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// When styled output is produced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColorMode {
    /// Colour only when the destination is a terminal.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Always,
    /// Never emit escape sequences.
    Never,
}

impl ColorMode {
    /// Resolves the mode for a destination whose terminal status is known.
    ///
    /// ```
    /// use logging_sink::ColorMode;
    ///
    /// assert!(ColorMode::Auto.enabled_for(true));
    /// assert!(!ColorMode::Auto.enabled_for(false));
    /// assert!(ColorMode::Always.enabled_for(false));
    /// ```
    #[must_use]
    pub const fn enabled_for(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// The mode's lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`ColorMode`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid color mode: {0} (expected auto, always or never)")]
pub struct ParseColorModeError(String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "yes" | "on" => Ok(Self::Always),
            "never" | "no" | "off" => Ok(Self::Never),
            _ => Err(ParseColorModeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("Always".parse::<ColorMode>(), Ok(ColorMode::Always));
        assert_eq!(" off ".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
    }

    #[test]
    fn rejects_unknown() {
        let error = "rainbow".parse::<ColorMode>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid color mode: rainbow (expected auto, always or never)"
        );
    }

    #[test]
    fn display_round_trips() {
        for mode in [ColorMode::Auto, ColorMode::Always, ColorMode::Never] {
            assert_eq!(mode.to_string().parse::<ColorMode>(), Ok(mode));
        }
    }
}

//! crates/logging/src/levels.rs
//! Severity levels, rank lookup, and the level-to-stream routing table.

use std::fmt;
use std::str::FromStr;

use crate::error::LoggerError;

/// Numeric position of a [`Level`] in the severity ordering.
///
/// Lower ranks are more severe. Thresholds are stored as ranks so callers may
/// configure values past [`Level::Silly`] to mean "everything".
pub type Rank = u8;

/// Severity levels recognised by the logger, from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Unrecoverable failures.
    Critical,
    /// Errors that require attention.
    Error,
    /// Conditions that may become errors.
    Warn,
    /// General informational messages.
    Info,
    /// Additional detail beyond `info`.
    Verbose,
    /// Developer diagnostics.
    Debug,
    /// Everything else.
    Silly,
}

impl Level {
    /// Every level in rank order.
    pub const ALL: [Self; 7] = [
        Self::Critical,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Verbose,
        Self::Debug,
        Self::Silly,
    ];

    /// Number of defined levels.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the rank of this level.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self as Rank
    }

    /// Returns the level occupying `rank`, if one exists.
    #[must_use]
    pub fn from_rank(rank: Rank) -> Option<Self> {
        Self::ALL.get(usize::from(rank)).copied()
    }

    /// Returns the lowercase name used in templates and handler events.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Silly => "silly",
        }
    }

    /// Returns the output stream this level is routed to.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Critical | Self::Error => Stream::Error,
            Self::Warn => Stream::Warn,
            Self::Info => Stream::Info,
            Self::Verbose => Stream::Log,
            Self::Debug | Self::Silly => Stream::Debug,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

/// Output streams a sink may expose.
///
/// Several levels share a stream; see [`Level::stream`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Error output (`critical`, `error`).
    Error,
    /// Warning output (`warn`).
    Warn,
    /// Informational output (`info`).
    Info,
    /// General output (`verbose`).
    Log,
    /// Debug output (`debug`, `silly`).
    Debug,
}

impl Stream {
    /// Reports whether the stream carries diagnostics conventionally written to stderr.
    #[must_use]
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Error | Self::Warn)
    }
}

/// A level given either by name or as an already-resolved rank.
///
/// Names are validated by [`rank_of`]; ranks pass through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LevelSpec {
    /// A numeric rank.
    Rank(Rank),
    /// A level name such as `"warn"`.
    Name(String),
}

impl LevelSpec {
    /// Parses environment-style input: digits become a rank, anything else a name.
    ///
    /// ```
    /// use logging::LevelSpec;
    ///
    /// assert_eq!(LevelSpec::parse("4"), LevelSpec::Rank(4));
    /// assert_eq!(LevelSpec::parse(" debug "), LevelSpec::Name("debug".into()));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        trimmed
            .parse::<Rank>()
            .map_or_else(|_| Self::Name(trimmed.to_owned()), Self::Rank)
    }
}

impl From<Level> for LevelSpec {
    fn from(level: Level) -> Self {
        Self::Rank(level.rank())
    }
}

impl From<Rank> for LevelSpec {
    fn from(rank: Rank) -> Self {
        Self::Rank(rank)
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for LevelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "{rank}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Resolves a [`LevelSpec`] to its rank.
///
/// ```
/// use logging::{LevelSpec, rank_of};
///
/// assert_eq!(rank_of(&LevelSpec::from("warn")).unwrap(), 2);
/// assert_eq!(rank_of(&LevelSpec::Rank(9)).unwrap(), 9);
/// assert!(rank_of(&LevelSpec::from("loud")).is_err());
/// ```
pub fn rank_of(spec: &LevelSpec) -> Result<Rank, LoggerError> {
    match spec {
        LevelSpec::Rank(rank) => Ok(*rank),
        LevelSpec::Name(name) => name.parse::<Level>().map(Level::rank),
    }
}

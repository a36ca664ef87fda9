//! crates/logging/src/theme.rs
//! Style tables and the theme store.
//!
//! A [`StyleTable`] maps each level, plus the auxiliary `time` and
//! `level-label` keys, to a sequence of opaque style tokens. The logger never
//! interprets tokens; sinks do.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::LoggerError;
use crate::levels::Level;

mod builtin;

pub use builtin::{dark, light};

/// Name under which an inline table passed to [`ThemeStore::select`] is stored.
pub const CUSTOM_THEME: &str = "custom";

/// Theme activated when no configuration says otherwise.
pub const DEFAULT_THEME: &str = "light";

/// Style slots consumed by each level entry: the namespace segment and the body.
pub const LEVEL_SLOTS: usize = 2;

/// A single opaque style token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style(Option<Arc<str>>);

impl Style {
    /// The empty style, used to pad short descriptors.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Creates a style from its token text.
    #[must_use]
    pub fn new(token: &str) -> Self {
        if token.is_empty() {
            Self::none()
        } else {
            Self(Some(Arc::from(token)))
        }
    }

    /// Returns the token text; empty for [`Style::none`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    /// Reports whether this is the empty style.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Style {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Keys of a [`StyleTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// The timestamp segment.
    Time,
    /// The `(level)` segment.
    LevelLabel,
    /// Namespace and body segments of a level.
    Level(Level),
}

impl StyleKey {
    /// Returns the key name (`time`, `level-label`, or the level name).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::LevelLabel => "level-label",
            Self::Level(level) => level.name(),
        }
    }
}

/// Per-level style descriptors for one theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleTable {
    time: Vec<Style>,
    level_label: Vec<Style>,
    levels: [Vec<Style>; Level::COUNT],
}

impl StyleTable {
    /// Creates a table with every descriptor empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the descriptor for `key`.
    pub fn set<I, S>(&mut self, key: StyleKey, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Style>,
    {
        let tokens = tokens.into_iter().map(Into::into).collect();
        match key {
            StyleKey::Time => self.time = tokens,
            StyleKey::LevelLabel => self.level_label = tokens,
            StyleKey::Level(level) => self.levels[level.index()] = tokens,
        }
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with<I, S>(mut self, key: StyleKey, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Style>,
    {
        self.set(key, tokens);
        self
    }

    /// Returns the descriptor stored for `key`.
    #[must_use]
    pub fn descriptor(&self, key: StyleKey) -> &[Style] {
        match key {
            StyleKey::Time => &self.time,
            StyleKey::LevelLabel => &self.level_label,
            StyleKey::Level(level) => &self.levels[level.index()],
        }
    }

    /// Returns token `index` of `key`, or [`Style::none`] when the descriptor is short.
    #[must_use]
    pub fn slot(&self, key: StyleKey, index: usize) -> Style {
        self.descriptor(key).get(index).cloned().unwrap_or_default()
    }

    /// Collects the style slots for one record in template order.
    ///
    /// The result always holds one slot per template placeholder: the time
    /// slot (when `with_time`), the level label, then [`LEVEL_SLOTS`] level
    /// slots.
    #[must_use]
    pub fn slots_for(&self, level: Level, with_time: bool) -> Vec<Style> {
        let mut slots = Vec::with_capacity(usize::from(with_time) + 1 + LEVEL_SLOTS);
        if with_time {
            slots.push(self.slot(StyleKey::Time, 0));
        }
        slots.push(self.slot(StyleKey::LevelLabel, 0));
        slots.extend((0..LEVEL_SLOTS).map(|index| self.slot(StyleKey::Level(level), index)));
        slots
    }
}

/// Theme selector accepted by [`ThemeStore::select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeRef {
    /// A registered theme.
    ByName(String),
    /// A table installed under [`CUSTOM_THEME`] without validation.
    Inline(StyleTable),
}

impl From<&str> for ThemeRef {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_owned())
    }
}

impl From<String> for ThemeRef {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}

impl From<StyleTable> for ThemeRef {
    fn from(table: StyleTable) -> Self {
        Self::Inline(table)
    }
}

/// Registered themes and the active selection.
#[derive(Clone, Debug)]
pub struct ThemeStore {
    themes: FxHashMap<String, StyleTable>,
    active: String,
}

impl ThemeStore {
    /// Creates a store holding the built-in `light` and `dark` themes with `light` active.
    #[must_use]
    pub fn new() -> Self {
        let mut themes = FxHashMap::default();
        themes.insert("light".to_owned(), light());
        themes.insert("dark".to_owned(), dark());
        Self {
            themes,
            active: DEFAULT_THEME.to_owned(),
        }
    }

    /// Activates a theme.
    ///
    /// Unknown names fail with [`LoggerError::InvalidTheme`] and leave the
    /// active theme unchanged.
    pub fn select(&mut self, theme: ThemeRef) -> Result<(), LoggerError> {
        match theme {
            ThemeRef::ByName(name) => {
                if !self.themes.contains_key(&name) {
                    return Err(LoggerError::invalid_theme(name));
                }
                self.active = name;
            }
            ThemeRef::Inline(table) => {
                self.themes.insert(CUSTOM_THEME.to_owned(), table);
                self.active = CUSTOM_THEME.to_owned();
            }
        }
        Ok(())
    }

    /// Adds or replaces a named theme without activating it.
    pub fn register(&mut self, name: impl Into<String>, table: StyleTable) {
        self.themes.insert(name.into(), table);
    }

    /// Returns the active theme's name.
    #[must_use]
    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// Returns the active table.
    #[must_use]
    pub fn active(&self) -> Option<&StyleTable> {
        self.themes.get(&self.active)
    }

    /// Returns a registered table by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleTable> {
        self.themes.get(name)
    }

    /// Returns the registered theme names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.themes.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Style slots for `level` under the active theme.
    #[must_use]
    pub fn slots_for(&self, level: Level, with_time: bool) -> Vec<Style> {
        self.active().map_or_else(
            || StyleTable::new().slots_for(level, with_time),
            |table| table.slots_for(level, with_time),
        )
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_on_light() {
        let store = ThemeStore::new();
        assert_eq!(store.active_name(), "light");
        assert_eq!(store.names(), ["dark", "light"]);
    }

    #[test]
    fn select_by_name_switches_active() {
        let mut store = ThemeStore::new();
        store.select("dark".into()).unwrap();
        assert_eq!(store.active_name(), "dark");
        assert_eq!(store.active(), Some(&dark()));
    }

    #[test]
    fn unknown_name_fails_and_keeps_selection() {
        let mut store = ThemeStore::new();
        store.select("dark".into()).unwrap();
        let err = store.select("not-a-theme".into()).unwrap_err();
        assert_eq!(err, LoggerError::InvalidTheme("not-a-theme".to_owned()));
        assert_eq!(store.active_name(), "dark");
    }

    #[test]
    fn inline_table_becomes_custom() {
        let mut store = ThemeStore::new();
        let table = StyleTable::new().with(StyleKey::Level(Level::Info), ["bold"]);
        store.select(table.clone().into()).unwrap();
        assert_eq!(store.active_name(), CUSTOM_THEME);
        assert_eq!(store.active(), Some(&table));

        store.select("light".into()).unwrap();
        store.select(CUSTOM_THEME.into()).unwrap();
        assert_eq!(store.active(), Some(&table));
    }

    #[test]
    fn slots_match_placeholder_count_even_for_short_descriptors() {
        let table = StyleTable::new().with(StyleKey::Level(Level::Warn), ["only-one"]);
        let with_time = table.slots_for(Level::Warn, true);
        assert_eq!(with_time.len(), 4);
        assert!(with_time[0].is_none());
        assert!(with_time[1].is_none());
        assert_eq!(with_time[2].as_str(), "only-one");
        assert!(with_time[3].is_none());

        assert_eq!(table.slots_for(Level::Warn, false).len(), 3);
    }

    #[test]
    fn slots_follow_fixed_order() {
        let slots = light().slots_for(Level::Info, true);
        let tokens: Vec<_> = slots.iter().map(Style::as_str).collect();
        assert_eq!(
            tokens,
            [
                "color: #AAA; font-size: 9px",
                "color: #444; font-size: 0px",
                "color: #66D9EF",
                "color: #111",
            ]
        );
    }

    #[test]
    fn empty_token_is_none() {
        assert!(Style::new("").is_none());
        assert_eq!(Style::none().to_string(), "");
    }

    #[test]
    fn key_names() {
        assert_eq!(StyleKey::Time.name(), "time");
        assert_eq!(StyleKey::LevelLabel.name(), "level-label");
        assert_eq!(StyleKey::Level(Level::Silly).name(), "silly");
    }
}

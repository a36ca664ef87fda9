//! crates/logging/src/thresholds.rs
//! Per-namespace threshold table.
//!
//! Each namespace maps to the highest [`Rank`] it will show. Namespaces without
//! an explicit entry fall back to the `default` entry, which always exists.

use rustc_hash::FxHashMap;

use crate::error::LoggerError;
use crate::levels::{LevelSpec, Rank, rank_of};

/// Namespace whose threshold applies to every namespace without its own entry.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Wildcard accepted by [`ThresholdTable::set`] to overwrite every known entry.
pub const ALL_NAMESPACES: &str = "*";

/// Mapping from namespace to its maximum emitted rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThresholdTable {
    entries: FxHashMap<String, Rank>,
}

impl ThresholdTable {
    /// Creates a table containing only the `default` entry.
    #[must_use]
    pub fn new(default: Rank) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(DEFAULT_NAMESPACE.to_owned(), default);
        Self { entries }
    }

    /// Returns the `default` threshold.
    #[must_use]
    pub fn default_rank(&self) -> Rank {
        // `new` seeds the entry and nothing removes it.
        self.entries.get(DEFAULT_NAMESPACE).copied().unwrap_or(0)
    }

    /// Sets the threshold for `namespace`.
    ///
    /// Passing [`ALL_NAMESPACES`] overwrites every namespace currently in the
    /// table, `default` included. Namespaces added afterwards are unaffected.
    /// On an invalid level the table is left untouched.
    pub fn set(&mut self, namespace: &str, level: &LevelSpec) -> Result<(), LoggerError> {
        let rank = rank_of(level)?;
        if namespace == ALL_NAMESPACES {
            self.entries.values_mut().for_each(|entry| *entry = rank);
        } else {
            self.entries.insert(namespace.to_owned(), rank);
        }
        Ok(())
    }

    /// Applies [`set`](Self::set) for each entry in order.
    ///
    /// Every level is resolved before anything is written, so a bad entry
    /// leaves the table as it was.
    pub fn set_many<I, N, L>(&mut self, mapping: I) -> Result<(), LoggerError>
    where
        I: IntoIterator<Item = (N, L)>,
        N: AsRef<str>,
        L: Into<LevelSpec>,
    {
        let resolved = mapping
            .into_iter()
            .map(|(namespace, level)| {
                let level = level.into();
                rank_of(&level).map(|rank| (namespace, LevelSpec::Rank(rank)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (namespace, rank) in resolved {
            self.set(namespace.as_ref(), &rank)?;
        }
        Ok(())
    }

    /// Returns the explicit threshold for `namespace`, or the default.
    #[must_use]
    pub fn resolve(&self, namespace: &str) -> Rank {
        self.entries
            .get(namespace)
            .copied()
            .unwrap_or_else(|| self.default_rank())
    }

    /// Reports whether a message of `candidate` rank passes for `namespace`.
    #[must_use]
    pub fn should_emit(&self, namespace: &str, candidate: Rank) -> bool {
        self.resolve(namespace) >= candidate
    }

    /// Returns the explicit entry for `namespace` without falling back.
    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<Rank> {
        self.entries.get(namespace).copied()
    }

    /// Returns every entry sorted by namespace.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Rank)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(namespace, rank)| (namespace.clone(), *rank))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Number of entries, `default` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the table holds at least `default`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::new(crate::levels::Level::Info.rank())
    }
}

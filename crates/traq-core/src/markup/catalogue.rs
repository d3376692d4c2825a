//! Stamp catalogue - read-only lookup table over a stamp snapshot

use std::collections::HashMap;

use crate::entities::Stamp;

/// Lookup table keyed by exact stamp name.
///
/// Built once per stamp fetch; if a snapshot carries duplicate names the
/// last record wins.
#[derive(Debug, Clone, Default)]
pub struct StampCatalogue {
    by_name: HashMap<String, Stamp>,
}

impl StampCatalogue {
    /// Build a catalogue from a stamp snapshot
    #[must_use]
    pub fn new(stamps: Vec<Stamp>) -> Self {
        stamps.into_iter().collect()
    }

    /// Look up a stamp by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Stamp> {
        self.by_name.get(name)
    }

    /// Number of distinct stamp names
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if the catalogue holds no stamps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<Stamp> for StampCatalogue {
    fn from_iter<I: IntoIterator<Item = Stamp>>(stamps: I) -> Self {
        let by_name = stamps
            .into_iter()
            .map(|stamp| (stamp.name.clone(), stamp))
            .collect();
        Self { by_name }
    }
}

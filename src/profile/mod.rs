// Profile — the frequency/metric mapping extracted from one document for a
// given stylometric feature.

pub mod builders;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stylometric profile: feature keys (words, punctuation marks, or named
/// metrics) mapped to numeric values. Counts are whole numbers; the
/// composite profile's two derived metrics carry 4-decimal values.
///
/// Backed by an ordered map so rendering and JSON output are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(BTreeMap<String, f64>);

impl Profile {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Seed every key in `keys` at zero. Profiles that must share a key set
    /// with a partner are built this way before any counting happens.
    pub fn zeroed<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(|key| (key.into(), 0.0)).collect())
    }

    /// Increment a key by one. Only keys already present are touched —
    /// fixed-vocabulary profiles ignore everything outside their seed set.
    pub fn bump_existing(&mut self, key: &str) {
        if let Some(value) = self.0.get_mut(key) {
            *value += 1.0;
        }
    }

    /// Set a key to an explicit value, inserting it if absent.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// True when both profiles expose exactly the same keys.
    pub fn same_keys(&self, other: &Profile) -> bool {
        self.0.len() == other.0.len() && self.0.keys().eq(other.0.keys())
    }
}

//! Per-element positive-pixel tallies.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Totals of mask-positive pixels keyed by element name, in name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    totals: BTreeMap<String, usize>,
}

impl Report {
    /// Ensures `name` has an entry, starting at zero.
    pub(crate) fn register(&mut self, name: &str) {
        self.totals.entry(name.to_owned()).or_insert(0);
    }

    pub(crate) fn add(&mut self, name: &str, count: usize) {
        *self.totals.entry(name.to_owned()).or_insert(0) += count;
    }

    /// Returns the total for `name`.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.totals.get(name).copied()
    }

    /// Iterates `(name, total)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.totals.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of elements in the report.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum over all elements.
    pub fn total(&self) -> usize {
        self.totals.values().sum()
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, usize> {
        &self.totals
    }
}

impl IntoIterator for Report {
    type Item = (String, usize);
    type IntoIter = btree_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.into_iter()
    }
}

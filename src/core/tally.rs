//! Frequency counting with a deterministic first-seen tie-break

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts that remember the order values were first seen
#[derive(Debug, Clone)]
pub(crate) struct Tally<K> {
    positions: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, key: K) {
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Most frequent value; among equal counts the one seen first wins
    pub(crate) fn mode(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, count) in &self.entries {
            match best {
                Some((_, top)) if *count <= top => {}
                _ => best = Some((key, *count)),
            }
        }
        best
    }

    /// All values by descending count, ties kept in first-seen order
    pub(crate) fn into_ranked(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

//! Container helpers: multiset counting and layered lookup.

use std::collections::HashMap;
use std::hash::Hash;

/// A multiset counter: tracks how many times each item has been seen.
///
/// Counts are never negative and absent items count as zero.
#[derive(Debug, Clone, Default)]
pub struct Tally<T: Eq + Hash> {
    counts: HashMap<T, usize>,
}

impl<T: Eq + Hash> Tally<T> {
    pub fn new() -> Self {
        Tally { counts: HashMap::new() }
    }

    /// Records one occurrence of `item`.
    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
    }

    /// Records one occurrence of every item in `items`.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// How many times `item` has been seen; zero if never.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct items seen at least once.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The `k` most frequent items, highest count first.
    pub fn most_common(&self, k: usize) -> Vec<(&T, usize)>
    where
        T: Ord,
    {
        let mut entries: Vec<_> = self.counts.iter().map(|(t, &n)| (t, n)).collect();
        // Ties break on the item itself so the order is deterministic.
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(k);
        entries
    }
}

impl<T: Eq + Hash> FromIterator<T> for Tally<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tally = Tally::new();
        tally.extend(iter);
        tally
    }
}

/// An ordered stack of borrowed maps searched front to back.
///
/// Lookup returns the first layer that has the key, so earlier layers shadow
/// later ones.
#[derive(Debug)]
pub struct LayeredMap<'a, K: Eq + Hash, V> {
    layers: Vec<&'a HashMap<K, V>>,
}

impl<'a, K: Eq + Hash, V> LayeredMap<'a, K, V> {
    pub fn new(layers: Vec<&'a HashMap<K, V>>) -> Self {
        LayeredMap { layers }
    }

    pub fn get(&self, key: &K) -> Option<&'a V> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// Number of distinct keys across all layers.
    pub fn len(&self) -> usize {
        let mut seen: std::collections::HashSet<&K> = std::collections::HashSet::new();
        for layer in &self.layers {
            seen.extend(layer.keys());
        }
        seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_occurrences() {
        let mut tally = Tally::new();
        tally.extend("leeggoo".chars());
        assert_eq!(tally.count(&'e'), 2);
        assert_eq!(tally.count(&'g'), 2);
        assert_eq!(tally.count(&'l'), 1);
        assert_eq!(tally.count(&'z'), 0);
        assert_eq!(tally.distinct(), 4);
    }

    #[test]
    fn tally_most_common_orders_by_count() {
        let tally: Tally<&str> = ["book", "pen", "book", "book", "pen", "ink"]
            .into_iter()
            .collect();
        let top = tally.most_common(2);
        assert_eq!(top, vec![(&"book", 3), (&"pen", 2)]);
    }

    #[test]
    fn tally_most_common_breaks_ties_deterministically() {
        let tally: Tally<&str> = ["b", "a", "b", "a"].into_iter().collect();
        assert_eq!(tally.most_common(2), vec![(&"a", 2), (&"b", 2)]);
    }

    #[test]
    fn layered_lookup_prefers_earlier_layers() {
        let mut front = HashMap::new();
        front.insert("one", 11);
        front.insert("two", 2);
        let mut back = HashMap::new();
        back.insert("one", 1);
        back.insert("three", 3);

        let chain = LayeredMap::new(vec![&front, &back]);
        // "one" exists in both layers; the front layer wins.
        assert_eq!(chain.get(&"one"), Some(&11));
        assert_eq!(chain.get(&"three"), Some(&3));
        assert_eq!(chain.get(&"four"), None);
        assert!(chain.contains(&"two"));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn empty_layers() {
        let chain: LayeredMap<&str, i32> = LayeredMap::new(vec![]);
        assert!(chain.is_empty());
        assert_eq!(chain.get(&"anything"), None);
    }
}

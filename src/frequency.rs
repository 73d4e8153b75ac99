use derivative::Derivative;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Alphabet, Symbol};

/// Occurrence counts for every symbol of one input.
///
/// Symbols that never occurred have an implicit count of zero, so the
/// table behaves as a total mapping over the alphabet while only storing
/// what was actually seen. Equality compares the counts only.
#[derive(Debug, Clone, Derivative, Serialize, Deserialize)]
#[derivative(PartialEq, Eq)]
#[serde(bound = "S: Symbol")]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,

    #[serde(skip)]
    #[derivative(PartialEq = "ignore")]
    skipped: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            skipped: 0,
        }
    }

    /// Counts `input`, dropping symbols that fall outside `alphabet`.
    pub fn count(input: impl IntoIterator<Item = S>, alphabet: &Alphabet) -> Self {
        let mut table = Self::new();
        for s in input {
            if alphabet.contains(s) {
                *table.counts.entry(s).or_default() += 1;
            } else {
                trace!("skipping out of range symbol {:?}", s);
                table.skipped += 1;
            }
        }

        debug!(
            "counted {} symbols ({} distinct, {} skipped)",
            table.total(),
            table.distinct(),
            table.skipped
        );
        table
    }

    pub fn get(&self, symbol: S) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.values().filter(|&&c| c > 0).count()
    }

    /// Symbols dropped by [`count`](Self::count) for being out of range.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.distinct() == 0
    }

    /// Non-zero entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts
            .iter()
            .filter(|&(_, &c)| c > 0)
            .map(|(&s, &c)| (s, c))
    }

    /// Adds the counts of `other`, e.g. to combine tables of separately
    /// counted partitions of one input.
    pub fn merge(&mut self, other: &FrequencyTable<S>) {
        for (s, c) in other.iter() {
            self.add(s, c);
        }
        self.skipped = self.skipped.saturating_add(other.skipped);
    }

    fn add(&mut self, symbol: S, count: u64) {
        let entry = self.counts.entry(symbol).or_default();
        *entry = entry.saturating_add(count);
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<(S, u64)> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (s, c) in iter {
            table.add(s, c);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_aaab() {
        let t = FrequencyTable::count("aaab".chars(), &Alphabet::default());
        assert_eq!(t.get('a'), 3);
        assert_eq!(t.get('b'), 1);
        assert_eq!(t.get('z'), 0);
        assert_eq!(t.total(), 4);
        assert_eq!(t.distinct(), 2);
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![('a', 3), ('b', 1)]);
    }

    #[test]
    fn skips_out_of_range() {
        let t = FrequencyTable::count("añb".chars(), &Alphabet::new(128));
        assert_eq!(t.total(), 2);
        assert_eq!(t.get('ñ'), 0);
        assert_eq!(t.skipped(), 1);
    }

    #[test]
    fn all_out_of_range_is_empty() {
        let t = FrequencyTable::count("ñññ".chars(), &Alphabet::new(128));
        assert!(t.is_empty());
        assert_eq!(t.skipped(), 3);
    }

    #[test]
    fn merge_partitions() {
        let alphabet = Alphabet::default();
        let text = b"the quick brown fox jumps over the lazy dog";
        let whole = FrequencyTable::count(text.iter().copied(), &alphabet);

        let (a, b) = text.split_at(17);
        let mut merged = FrequencyTable::count(a.iter().copied(), &alphabet);
        merged.merge(&FrequencyTable::count(b.iter().copied(), &alphabet));

        assert_eq!(merged, whole);
    }

    #[test]
    fn counts_saturate() {
        let mut t: FrequencyTable<u8> = vec![(b'a', u64::MAX), (b'b', 7)].into_iter().collect();
        assert_eq!(t.total(), u64::MAX);

        t.merge(&vec![(b'a', 1)].into_iter().collect());
        assert_eq!(t.get(b'a'), u64::MAX);
    }

    #[test]
    fn equality_ignores_skipped() {
        let a = FrequencyTable::count("abñ".chars(), &Alphabet::new(128));
        let b = FrequencyTable::count("ab".chars(), &Alphabet::new(128));
        assert_eq!(a.skipped(), 1);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_entries_are_ignored() {
        let t: FrequencyTable<u8> = vec![(b'a', 0), (b'b', 2)].into_iter().collect();
        assert_eq!(t.distinct(), 1);
        assert_eq!(t.iter().collect::<Vec<_>>(), vec![(b'b', 2)]);
    }
}

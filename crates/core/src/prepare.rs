//! Prepare module - choose the word pairs for one game
//!
//! Turns a [`WordPairDataset`] into a bounded list of [`WordPair`]s and the
//! [`MatchIndex`] used to judge turns.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::dataset::WordPairDataset;
use crate::error::{DatasetError, Result};
use crate::rng::SimpleRng;

/// Two words that match each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    pub first: String,
    pub second: String,
}

impl WordPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Bidirectional word -> partner lookup.
///
/// Built in one go from a pair list; for every key `k`,
/// `partner(partner(k)) == k`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIndex {
    partners: HashMap<String, String>,
}

impl MatchIndex {
    pub fn from_pairs(pairs: &[WordPair]) -> Self {
        let mut partners = HashMap::with_capacity(pairs.len() * 2);
        for pair in pairs {
            partners.insert(pair.first.clone(), pair.second.clone());
            partners.insert(pair.second.clone(), pair.first.clone());
        }
        Self { partners }
    }

    pub fn partner(&self, word: &str) -> Option<&str> {
        self.partners.get(word).map(String::as_str)
    }

    /// Whether two words form a pair. Unknown words never match.
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.partner(a) == Some(b)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

/// The pairs chosen for a game together with their index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedGame {
    pairs: Vec<WordPair>,
    index: MatchIndex,
}

impl PreparedGame {
    /// Wrap an explicit pair list (used by tests and replays).
    ///
    /// Fails with [`DatasetError::Empty`] when `pairs` is empty.
    pub fn from_pairs(pairs: Vec<WordPair>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(DatasetError::Empty);
        }
        let index = MatchIndex::from_pairs(&pairs);
        Ok(Self { pairs, index })
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    /// Number of pairs dealt; the game is won when all of them are found.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

/// Choose up to `target_pairs` pairs from `dataset`.
///
/// Entries are visited in shuffled order. An entry contributes a pair when it
/// still has two distinct, non-empty words that no earlier pair uses; when it
/// has more than two such words, two are picked at random. Entries that
/// cannot contribute are skipped and later entries fill their place, so the
/// result holds `min(target_pairs, valid entries)` pairs.
pub fn prepare(
    dataset: &WordPairDataset,
    target_pairs: usize,
    rng: &mut SimpleRng,
) -> Result<PreparedGame> {
    let mut groups = dataset.word_groups();
    rng.shuffle(&mut groups);

    let mut used: HashSet<String> = HashSet::new();
    let mut pairs = Vec::with_capacity(target_pairs.min(groups.len()));
    let mut skipped = 0usize;

    for group in groups {
        if pairs.len() >= target_pairs {
            break;
        }
        match pick_pair(group, &used, rng) {
            Some(pair) => {
                used.insert(pair.first.clone());
                used.insert(pair.second.clone());
                pairs.push(pair);
            }
            None => skipped += 1,
        }
    }

    debug!(
        "prepared {} of {} requested pairs from {} {} entries ({} skipped)",
        pairs.len(),
        target_pairs,
        dataset.len(),
        dataset.shape(),
        skipped
    );

    PreparedGame::from_pairs(pairs)
}

fn pick_pair(group: Vec<String>, used: &HashSet<String>, rng: &mut SimpleRng) -> Option<WordPair> {
    let mut candidates: Vec<String> = Vec::with_capacity(group.len());
    for word in group {
        let word = word.trim();
        if word.is_empty() || used.contains(word) || candidates.iter().any(|c| c == word) {
            continue;
        }
        candidates.push(word.to_string());
    }

    if candidates.len() < 2 {
        return None;
    }
    if candidates.len() > 2 {
        rng.shuffle(&mut candidates);
        candidates.truncate(2);
    }

    let second = candidates.pop()?;
    let first = candidates.pop()?;
    Some(WordPair { first, second })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{AlternativesEntry, PairEntry};

    fn numbered_pairs(n: usize) -> WordPairDataset {
        WordPairDataset::Pairs(
            (0..n)
                .map(|i| PairEntry::new(format!("a{}", i), format!("b{}", i)))
                .collect(),
        )
    }

    #[test]
    fn test_match_index_is_symmetric() {
        let pairs = vec![WordPair::new("a", "b"), WordPair::new("c", "d")];
        let index = MatchIndex::from_pairs(&pairs);

        for pair in &pairs {
            assert_eq!(index.partner(&pair.first), Some(pair.second.as_str()));
            assert_eq!(index.partner(&pair.second), Some(pair.first.as_str()));
        }
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_match_index_unknown_word_is_mismatch() {
        let index = MatchIndex::from_pairs(&[WordPair::new("a", "b")]);
        assert!(index.is_match("b", "a"));
        assert!(!index.is_match("a", "zzz"));
        assert!(!index.is_match("zzz", "a"));
    }

    #[test]
    fn test_prepare_takes_exactly_target_pairs() {
        let dataset = numbered_pairs(50);
        let mut rng = SimpleRng::new(12345);

        let prepared = prepare(&dataset, 10, &mut rng).unwrap();
        assert_eq!(prepared.pair_count(), 10);
    }

    #[test]
    fn test_prepare_uses_all_entries_when_target_exceeds_them() {
        let dataset = numbered_pairs(3);
        let mut rng = SimpleRng::new(1);

        let prepared = prepare(&dataset, 10, &mut rng).unwrap();
        assert_eq!(prepared.pair_count(), 3);
    }

    #[test]
    fn test_prepare_index_covers_every_word() {
        let dataset = numbered_pairs(20);
        let mut rng = SimpleRng::new(8);

        let prepared = prepare(&dataset, 10, &mut rng).unwrap();
        for pair in prepared.pairs() {
            assert!(prepared.index().is_match(&pair.first, &pair.second));
            assert!(prepared.index().is_match(&pair.second, &pair.first));
        }
        assert_eq!(prepared.index().len(), 20);
    }

    #[test]
    fn test_prepare_selection_varies_with_seed() {
        let dataset = numbered_pairs(50);
        let a = prepare(&dataset, 10, &mut SimpleRng::new(1)).unwrap();
        let b = prepare(&dataset, 10, &mut SimpleRng::new(2)).unwrap();
        assert_ne!(a.pairs(), b.pairs());
    }

    #[test]
    fn test_prepare_is_deterministic_for_seed() {
        let dataset = numbered_pairs(50);
        let a = prepare(&dataset, 10, &mut SimpleRng::new(77)).unwrap();
        let b = prepare(&dataset, 10, &mut SimpleRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prepare_picks_two_alternatives_from_entry() {
        let dataset = WordPairDataset::Alternatives(vec![AlternativesEntry::new([
            "שמח", "עליז", "מאושר", "צוהל",
        ])]);
        let mut rng = SimpleRng::new(3);

        let prepared = prepare(&dataset, 10, &mut rng).unwrap();
        assert_eq!(prepared.pair_count(), 1);
        let pair = &prepared.pairs()[0];
        assert_ne!(pair.first, pair.second);
        let words = ["שמח", "עליז", "מאושר", "צוהל"];
        assert!(words.contains(&pair.first.as_str()));
        assert!(words.contains(&pair.second.as_str()));
    }

    #[test]
    fn test_prepare_skips_entries_without_two_distinct_words() {
        let dataset = WordPairDataset::Pairs(vec![
            PairEntry::new("same", "same"),
            PairEntry::new("  ", "x"),
            PairEntry::new("ok1", "ok2"),
        ]);
        let mut rng = SimpleRng::new(5);

        let prepared = prepare(&dataset, 10, &mut rng).unwrap();
        assert_eq!(prepared.pairs(), &[WordPair::new("ok1", "ok2")]);
    }

    #[test]
    fn test_prepare_trims_words() {
        let dataset = WordPairDataset::Pairs(vec![PairEntry::new(" a ", "b\t")]);
        let prepared = prepare(&dataset, 1, &mut SimpleRng::new(1)).unwrap();
        assert_eq!(prepared.pairs(), &[WordPair::new("a", "b")]);
    }

    #[test]
    fn test_prepare_never_reuses_a_word() {
        let dataset = WordPairDataset::Alternatives(vec![
            AlternativesEntry::new(["a", "b"]),
            AlternativesEntry::new(["b", "c", "d"]),
            AlternativesEntry::new(["a", "c"]),
        ]);

        for seed in 1..50 {
            let prepared = prepare(&dataset, 10, &mut SimpleRng::new(seed)).unwrap();
            let mut words: Vec<&str> = prepared
                .pairs()
                .iter()
                .flat_map(|p| [p.first.as_str(), p.second.as_str()])
                .collect();
            let total = words.len();
            words.sort_unstable();
            words.dedup();
            assert_eq!(words.len(), total, "seed {} reused a word", seed);
        }
    }

    #[test]
    fn test_prepare_empty_dataset_fails() {
        let dataset = WordPairDataset::Pairs(Vec::new());
        let err = prepare(&dataset, 10, &mut SimpleRng::new(1)).unwrap_err();
        assert_eq!(err, DatasetError::Empty);
    }

    #[test]
    fn test_prepare_all_invalid_fails() {
        let dataset = WordPairDataset::Alternatives(vec![AlternativesEntry::new(["only"])]);
        let err = prepare(&dataset, 10, &mut SimpleRng::new(1)).unwrap_err();
        assert_eq!(err, DatasetError::Empty);
    }

    #[test]
    fn test_prepare_zero_target_fails() {
        let err = prepare(&numbered_pairs(5), 0, &mut SimpleRng::new(1)).unwrap_err();
        assert_eq!(err, DatasetError::Empty);
    }
}

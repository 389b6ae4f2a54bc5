//! Search layer: case-insensitive substring search over node labels.
//!
//! Every contiguous substring (1..=`max_ngram_len` characters) of every folded
//! label is an n-gram key. Keys are compiled into an FST mapping each n-gram to
//! a posting list of node ordinals, so a query no longer than the cap is a
//! single FST lookup followed by a slice read. Longer queries fall back to a
//! linear scan over the folded labels; no match is ever dropped.
//!
//! # Ranking
//!
//! Earlier match position in the label ranks higher (prefix matches first),
//! ties broken by ascending id. Posting lists are stored in this order, so
//! ranking costs nothing at query time.
//!
//! The index holds ids only. It is rebuilt from scratch whenever the
//! [`NodeStore`] is replaced and never patched.

use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::store::NodeStore;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

pub struct SearchIndex {
    /// Ordinal → node id, in store pre-order.
    ids: Vec<String>,
    /// Ordinal → position of the id in ascending id order.
    id_rank: Vec<u32>,
    /// Ordinal → case-folded label.
    folded: Vec<String>,
    /// n-gram → slot in `postings`.
    ngrams: fst::Map<Vec<u8>>,
    /// Duplicate-free ordinals per n-gram, ranked by (first match position, id).
    postings: Vec<Vec<u32>>,
    max_ngram_len: usize,
}

/// Size figures for logging and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub nodes: usize,
    pub ngrams: usize,
    pub postings: usize,
}

/// Case folding applied to labels and queries alike. Each character folds on
/// its own, so a letter folds the same wherever it appears in a word.
pub fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

impl SearchIndex {
    pub fn build(store: &NodeStore, config: &IndexConfig) -> Result<Self, IndexError> {
        let max_ngram_len = config.max_ngram_len.max(1);
        // n-gram → (first match position, ordinal), one entry per node.
        let mut grams: BTreeMap<String, Vec<(u32, u32)>> = BTreeMap::new();
        let mut ids = Vec::with_capacity(store.len());
        let mut folded = Vec::with_capacity(store.len());

        for (ordinal, node) in store.iter().enumerate() {
            let ordinal = ordinal as u32;
            let label = fold(&node.label);

            // Byte offsets of every char boundary, including the end.
            let bounds: Vec<usize> = label
                .char_indices()
                .map(|(i, _)| i)
                .chain(std::iter::once(label.len()))
                .collect();
            let chars = bounds.len() - 1;

            // Starts ascend, so the first entry a node gets in a list carries
            // its earliest match position.
            for start in 0..chars {
                for end in (start + 1)..=(start + max_ngram_len).min(chars) {
                    let gram = &label[bounds[start]..bounds[end]];
                    match grams.get_mut(gram) {
                        Some(list) => {
                            if list.last().map(|&(_, o)| o) != Some(ordinal) {
                                list.push((start as u32, ordinal));
                            }
                        }
                        None => {
                            grams.insert(gram.to_string(), vec![(start as u32, ordinal)]);
                        }
                    }
                }
            }

            ids.push(node.id.clone());
            folded.push(label);
        }

        let mut by_id: Vec<u32> = (0..ids.len() as u32).collect();
        by_id.sort_unstable_by(|&a, &b| ids[a as usize].cmp(&ids[b as usize]));
        let mut id_rank = vec![0u32; ids.len()];
        for (rank, &ordinal) in by_id.iter().enumerate() {
            id_rank[ordinal as usize] = rank as u32;
        }

        let mut builder = fst::MapBuilder::memory();
        let mut postings = Vec::with_capacity(grams.len());
        for (slot, (gram, mut list)) in grams.into_iter().enumerate() {
            builder.insert(gram.as_bytes(), slot as u64)?;
            list.sort_unstable_by_key(|&(pos, ordinal)| (pos, id_rank[ordinal as usize]));
            postings.push(list.into_iter().map(|(_, ordinal)| ordinal).collect());
        }

        let index = Self {
            ids,
            id_rank,
            folded,
            ngrams: builder.into_map(),
            postings,
            max_ngram_len,
        };
        let stats = index.stats();
        tracing::debug!(
            nodes = stats.nodes,
            ngrams = stats.ngrams,
            postings = stats.postings,
            "search: index built"
        );
        Ok(index)
    }

    /// Ids whose label contains `query` (case-insensitively), best match
    /// first. An empty query matches nothing; callers show the unfiltered
    /// tree instead.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_limited(query, usize::MAX)
    }

    /// [`search`](Self::search), truncated to the `limit` best results.
    pub fn search_limited(&self, query: &str, limit: usize) -> Vec<String> {
        self.ranked(query)
            .iter()
            .take(limit)
            .map(|&ordinal| self.ids[ordinal as usize].clone())
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            nodes: self.ids.len(),
            ngrams: self.ngrams.len(),
            postings: self.postings.iter().map(Vec::len).sum(),
        }
    }

    pub fn max_ngram_len(&self) -> usize {
        self.max_ngram_len
    }

    /// Matching ordinals in rank order.
    fn ranked(&self, query: &str) -> Cow<'_, [u32]> {
        let needle = fold(query);
        if needle.is_empty() {
            return Cow::Borrowed(&[]);
        }

        if needle.chars().count() > self.max_ngram_len {
            tracing::warn!(
                query = %query,
                cap = self.max_ngram_len,
                "search: query longer than n-gram cap, scanning all labels"
            );
            return Cow::Owned(self.scan(&needle));
        }

        match self.ngrams.get(needle.as_bytes()) {
            Some(slot) => Cow::Borrowed(&self.postings[slot as usize]),
            None => Cow::Borrowed(&[]),
        }
    }

    fn scan(&self, needle: &str) -> Vec<u32> {
        let mut hits: Vec<(usize, u32, u32)> = self
            .folded
            .iter()
            .enumerate()
            .filter_map(|(ordinal, label)| {
                label.find(needle).map(|byte| {
                    (
                        label[..byte].chars().count(),
                        self.id_rank[ordinal],
                        ordinal as u32,
                    )
                })
            })
            .collect();
        hits.sort_unstable();
        hits.into_iter().map(|(_, _, ordinal)| ordinal).collect()
    }
}

impl fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("SearchIndex")
            .field("nodes", &stats.nodes)
            .field("ngrams", &stats.ngrams)
            .field("postings", &stats.postings)
            .field("max_ngram_len", &self.max_ngram_len)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

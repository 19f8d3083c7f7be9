//! The document: a linear buffer of items plus the version vector
//! summarizing which operations have been integrated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::identifier::{Id, VersionVector};
use crate::item::Item;

/// A replica's materialized state for one sequence-CRDT document.
///
/// `content` is never reordered and items are never removed from it once
/// integrated — only `is_deleted` flips.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document<T> {
    pub content: Vec<Item<T>>,
    pub version: VersionVector,
    /// Count of items with content present and not deleted. Kept in sync
    /// incrementally rather than recomputed on every read.
    pub length: usize,
    /// Highest `seq` across all items; only meaningful to the Automerge
    /// algorithm, which uses it to assign new items' sibling-order seq.
    pub max_seq: u32,

    /// Scratch counters for the lookup hint's hit rate. Not correctness
    /// bearing — purely for a caller/test to observe how effective the
    /// hint is.
    pub hits: u64,
    pub misses: u64,
}

impl<T> Document<T> {
    pub fn new() -> Self {
        Document {
            content: Vec::new(),
            version: VersionVector::new(),
            length: 0,
            max_seq: 0,
            hits: 0,
            misses: 0,
        }
    }
}

impl<T> Default for Document<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Document<T> {
    /// The visible, in-order sequence of payloads: tombstones and Sync9
    /// placeholders are filtered out.
    pub fn get_content(&self) -> Vec<T> {
        self.content.iter()
            .filter(|item| item.is_visible())
            .map(|item| item.content.clone().unwrap())
            .collect()
    }
}

impl<T> Document<T> {
    /// Visible length, recomputed from scratch. Used only by `dbg_check` to
    /// validate the incrementally maintained `length` field — the hot path
    /// never calls this.
    fn count_visible(&self) -> usize {
        self.content.iter().filter(|item| item.is_visible()).count()
    }

    /// Validate every structural invariant a document must hold. Intended
    /// for tests and debug builds, cheap enough to call after every
    /// mutation in a fuzzer.
    pub fn dbg_check(&self) {
        assert_eq!(self.length, self.count_visible(), "length invariant");

        for item in &self.content {
            // No gaps per agent, and the version vector agrees.
            assert!(self.version.get(&item.id.agent) >= item.id.seq as i64);

            // Anchors reference items present in content.
            if let Some(origin_left) = &item.origin_left {
                assert!(self.content.iter().any(|o| &o.id == origin_left),
                    "originLeft {:?} missing from content", origin_left);
            }
            if let Some(origin_right) = &item.origin_right {
                assert!(self.content.iter().any(|o| &o.id == origin_right),
                    "originRight {:?} missing from content", origin_right);
            }
        }

        // No-gaps check, per agent. A Sync9 split duplicates an id across a
        // placeholder and its real half, so seqs are deduped before
        // checking for gaps.
        let mut seen_seqs: std::collections::HashMap<&str, std::collections::BTreeSet<u32>> =
            std::collections::HashMap::new();
        for item in &self.content {
            seen_seqs.entry(item.id.agent.as_str()).or_default().insert(item.id.seq);
        }
        for seqs in seen_seqs.values() {
            for (i, &seq) in seqs.iter().enumerate() {
                assert_eq!(seq, i as u32, "gap in per-agent seq sequence");
            }
        }
    }
}

/// Has `id` already been integrated according to `version`?
pub fn is_in_version(id: &Id, version: &VersionVector) -> bool {
    version.contains(id)
}

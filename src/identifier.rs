//! Identifiers and the version vector that tracks which of them a document
//! has already integrated.

use std::cmp::Ordering;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;

/// An opaque per-author name. Short strings (agent names are almost always
/// a handful of ASCII characters) live inline thanks to `smartstring`.
pub type Agent = SmartString;

/// `(agent, seq)`. Globally unique; `seq` increments by exactly one per
/// operation a given agent produces.
///
/// Ordered lexicographically by `(agent, seq)` — this is the tie-break used
/// by every integration algorithm in this crate, not numeric creation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Id {
    pub agent: Agent,
    pub seq: u32,
}

impl Id {
    pub fn new(agent: impl Into<Agent>, seq: u32) -> Self {
        Id { agent: agent.into(), seq }
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Self) -> Ordering {
        self.agent.cmp(&other.agent).then(self.seq.cmp(&other.seq))
    }
}

/// Maps agent -> highest seq observed for that agent. An agent absent from
/// the map has observed seq `-1` (nothing from it yet).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionVector(HashMap<Agent, u32>);

impl VersionVector {
    pub fn new() -> Self {
        VersionVector(HashMap::new())
    }

    /// Highest seq seen for `agent`, or `-1` if nothing has been seen yet.
    pub fn get(&self, agent: &str) -> i64 {
        match self.0.get(agent) {
            Some(&seq) => seq as i64,
            None => -1,
        }
    }

    /// True if `id` has already been integrated according to this version.
    pub fn contains(&self, id: &Id) -> bool {
        self.get(&id.agent) >= id.seq as i64
    }

    /// Record that `id` has now been integrated. Panics (via debug_assert)
    /// if this would violate the no-gaps invariant; callers are expected to
    /// have already checked `OutOfOrder`/causal readiness before calling.
    pub fn observe(&mut self, id: &Id) {
        debug_assert_eq!(self.get(&id.agent), id.seq as i64 - 1);
        self.0.insert(id.agent.clone(), id.seq);
    }
}

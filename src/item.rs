//! The single `Item` shape shared by all four integration algorithms.
//! Fields meaningless to a given algorithm are still stored and still
//! round-trip through merge unchanged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// One element of a document, plus the CRDT anchors used to place it.
///
/// `content` is `None` for a Sync9 placeholder: a zero-length split point
/// that exists only to host children between the two halves of a split
/// item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item<T> {
    pub content: Option<T>,
    pub id: Id,

    /// Left anchor. `None` means "root" (the start of the document).
    pub origin_left: Option<Id>,
    /// Right anchor. `None` means "end of document". Only consulted by
    /// Yjs/YjsMod.
    pub origin_right: Option<Id>,

    /// Per-document (not per-agent) monotonic counter. Only consulted by
    /// Automerge, to order same-parent siblings.
    pub seq: u32,

    /// Sync9-only: whether this item was anchored *after* `origin_left`'s
    /// current content (as opposed to as `origin_left`'s first child).
    pub insert_after: bool,

    pub is_deleted: bool,
}

impl<T> Item<T> {
    /// True if this item contributes to the visible sequence.
    pub fn is_visible(&self) -> bool {
        self.content.is_some() && !self.is_deleted
    }
}

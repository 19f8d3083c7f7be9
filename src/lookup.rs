//! Translating between logical identifiers/visible positions and absolute
//! indices into `Document::content`.
//!
//! Every integration algorithm pays for this translation on its hot path;
//! the `hint` here is the one optimization this crate provides — a cursor
//! locality trick, since a fresh local insert's anchors are almost always
//! near the index it's about to land at.

use crate::doc::Document;
use crate::error::OpError;
use crate::identifier::Id;

/// Index of the item whose id is `needle`, or `-1` if `needle` is root.
///
/// `hint`, when given, is checked first — a hot-path optimization for the
/// common case where consecutive local edits land near each other.
/// `at_end` (Sync9 only) restricts the match to items whose `content` is
/// present, distinguishing the two halves of a split item that share an id.
pub fn find_item<T>(
    doc: &mut Document<T>,
    needle: Option<&Id>,
    at_end: bool,
    hint: Option<i64>,
) -> Result<i64, OpError> {
    let needle = match needle {
        None => return Ok(-1),
        Some(id) => id,
    };

    let matches = |item: &crate::item::Item<T>| {
        &item.id == needle && (!at_end || item.content.is_some())
    };

    if let Some(hint) = hint {
        if hint >= 0 {
            if let Some(item) = doc.content.get(hint as usize) {
                if matches(item) {
                    doc.hits += 1;
                    return Ok(hint);
                }
            }
        }
    }

    doc.misses += 1;
    doc.content.iter()
        .position(|item| matches(item))
        .map(|idx| idx as i64)
        .ok_or_else(|| OpError::ItemNotFound { id: needle.clone() })
}

/// Index at which visible position `pos` begins. Counts only items with
/// content present and not deleted.
///
/// `stick_end` (Sync9 only): return the first candidate index even when the
/// item sitting there is a placeholder/tombstone, so insertion can land
/// *before* adjacent empty items rather than skipping past them.
pub fn find_item_at_pos<T>(
    doc: &Document<T>,
    pos: usize,
    stick_end: bool,
) -> Result<usize, OpError> {
    let mut remaining = pos;
    for (i, item) in doc.content.iter().enumerate() {
        // `remaining` visible items have already been stepped over. Stop
        // here unless we must skip past a non-visible item first (the
        // `stick_end == false` case: don't let insertion stick to the near
        // side of a placeholder/tombstone).
        if remaining == 0 && (stick_end || item.is_visible()) {
            return Ok(i);
        }
        if item.is_visible() {
            remaining -= 1;
        }
    }
    if remaining == 0 {
        Ok(doc.content.len())
    } else {
        Err(OpError::PositionOutOfRange { pos, len: doc.length })
    }
}

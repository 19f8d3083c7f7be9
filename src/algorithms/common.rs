//! Shared scaffolding for the Yjs-family algorithms (YjsMod, classic Yjs):
//! both walk the same destIdx/scanning loop and differ only in the
//! case-split applied when two items share a left anchor. Factored out
//! once rather than duplicated, since the two algorithms are otherwise
//! byte-for-byte identical.

use std::cmp::Ordering;

use crate::doc::Document;
use crate::error::OpError;
use crate::identifier::Id;
use crate::item::Item;
use crate::lookup::find_item;

/// What to do about the candidate item `O` sitting at the current scan
/// position, once `O`'s and `N`'s left anchors have compared equal.
pub(super) enum Step {
    /// Stop scanning; commit at the current `dest_idx`.
    Break,
    /// Keep scanning, updating whether we're in "tentative pre-span" mode.
    Continue { scanning: bool },
}

/// Run the shared YjsMod/Yjs scan and return the index to splice `item`
/// into. `decide` implements the algorithm-specific case split for the
/// "oleft == left" row; every other row is identical between the two
/// algorithms.
pub(super) fn yjs_family_integrate<T>(
    doc: &mut Document<T>,
    item: &Item<T>,
    hint: Option<i64>,
    decide: impl Fn(Ordering, Ordering) -> Step,
) -> Result<usize, OpError> {
    let left = find_item(doc, item.origin_left.as_ref(), false, hint.map(|h| h - 1))?;
    let right = match &item.origin_right {
        None => doc.content.len() as i64,
        Some(id) => find_item(doc, Some(id), false, None)?,
    };

    let mut dest_idx = (left + 1) as usize;
    let mut scanning = false;
    let mut i = dest_idx;

    loop {
        if !scanning {
            dest_idx = i;
        }
        if i == doc.content.len() || i as i64 == right {
            break;
        }

        let o_origin_left = doc.content[i].origin_left.clone();
        let o_origin_right = doc.content[i].origin_right.clone();
        let o_agent = doc.content[i].id.agent.clone();

        let oleft = find_item(doc, o_origin_left.as_ref(), false, None)?;
        let oright = match &o_origin_right {
            None => doc.content.len() as i64,
            Some(id) => find_item(doc, Some(id), false, None)?,
        };

        match oleft.cmp(&left) {
            Ordering::Less => break,
            Ordering::Equal => {
                match decide(item.id.agent.cmp(&o_agent), oright.cmp(&right)) {
                    Step::Break => break,
                    Step::Continue { scanning: s } => scanning = s,
                }
            }
            Ordering::Greater => {
                // Skip the interior of a foreign run while keeping the
                // tentative dest_idx from before we entered it.
            }
        }

        i += 1;
    }

    Ok(dest_idx)
}

/// Splice `item` into `doc.content` at `dest_idx`, bumping `length` if it's
/// visible. Shared commit step for every algorithm.
pub(super) fn commit<T>(doc: &mut Document<T>, dest_idx: usize, item: Item<T>) {
    let visible = item.is_visible();
    doc.content.insert(dest_idx, item);
    if visible {
        doc.length += 1;
    }
}

/// Precondition: the item's seq must be exactly one past what's already
/// been seen from its agent. Updates the version vector on success.
pub(super) fn check_order_and_observe<T>(doc: &mut Document<T>, id: &Id) -> Result<(), OpError> {
    let expected = (doc.version.get(&id.agent) + 1) as u32;
    if id.seq != expected {
        return Err(OpError::OutOfOrder { id: id.clone(), expected_seq: expected });
    }
    doc.version.observe(id);
    Ok(())
}

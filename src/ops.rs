//! Translating a position-addressed local edit into an anchored `Item`,
//! then handing it to the selected algorithm's `integrate`.

use crate::algorithms::{self, Algorithm};
use crate::doc::Document;
use crate::error::OpError;
use crate::identifier::Id;
use crate::item::Item;
use crate::lookup::find_item_at_pos;

/// Local insert for YjsMod/Yjs/Automerge: a single anchor pair straddling
/// the insertion point is enough, since none of the three need to
/// distinguish "first child of X" from "after X".
pub fn local_insert<T>(
    doc: &mut Document<T>,
    algorithm: Algorithm,
    agent: &str,
    pos: usize,
    content: T,
) -> Result<Id, OpError> {
    let i = find_item_at_pos(doc, pos, false)?;

    let origin_left = if i > 0 { Some(doc.content[i - 1].id.clone()) } else { None };
    let origin_right = doc.content.get(i).map(|item| item.id.clone());

    let id = next_id(doc, agent);
    let seq = doc.max_seq + 1;

    let item = Item {
        content: Some(content),
        id: id.clone(),
        origin_left,
        origin_right,
        seq,
        insert_after: false,
        is_deleted: false,
    };

    algorithms::integrate(algorithm, doc, item, Some(i as i64))?;
    Ok(id)
}

/// Local insert for Sync9: the anchor must distinguish "as first child of
/// X" from "after X", so this walks into the deepest contiguous child run
/// anchored at the insertion point.
pub fn local_insert_sync9<T>(
    doc: &mut Document<T>,
    agent: &str,
    pos: usize,
    content: T,
) -> Result<Id, OpError> {
    let mut i = find_item_at_pos(doc, pos, true)?;

    let mut parent_id = if i > 0 { Some(doc.content[i - 1].id.clone()) } else { None };
    let mut origin_left = parent_id.clone();
    let mut insert_after = true;

    while i < doc.content.len() && doc.content[i].origin_left == parent_id {
        let child = &doc.content[i];
        parent_id = Some(child.id.clone());
        origin_left = Some(child.id.clone());
        insert_after = false;
        let child_has_content = child.content.is_some();
        i += 1;
        if child_has_content {
            break;
        }
    }

    let origin_right = doc.content.get(i).map(|item| item.id.clone());
    let id = next_id(doc, agent);
    let seq = doc.max_seq + 1;

    let item = Item {
        content: Some(content),
        id: id.clone(),
        origin_left,
        origin_right,
        seq,
        insert_after,
        is_deleted: false,
    };

    algorithms::integrate(Algorithm::Sync9, doc, item, Some(i as i64))?;
    Ok(id)
}

/// Delete the item sitting at visible position `pos`. A no-op (but not an
/// error) if it's already deleted. Deletion is local-only: it never
/// propagates through `merge_into`.
pub fn local_delete<T>(doc: &mut Document<T>, pos: usize) -> Result<(), OpError> {
    let i = find_item_at_pos(doc, pos, false)?;
    let len = doc.length;
    let item = doc.content.get_mut(i).ok_or(OpError::PositionOutOfRange { pos, len })?;
    if !item.is_deleted {
        item.is_deleted = true;
        doc.length -= 1;
    }
    Ok(())
}

fn next_id<T>(doc: &Document<T>, agent: &str) -> Id {
    let seq = (doc.version.get(agent) + 1) as u32;
    Id::new(agent, seq)
}

//! Sync9 integration. Items form a tree; a node may split to host children
//! between its first and second halves. A content-absent placeholder item
//! materializes a split point.

use std::cmp::Ordering;

use super::common::check_order_and_observe;
use crate::doc::Document;
use crate::error::OpError;
use crate::item::Item;
use crate::lookup::find_item;

pub fn integrate<T>(doc: &mut Document<T>, item: Item<T>, hint: Option<i64>) -> Result<(), OpError> {
    check_order_and_observe(doc, &item.id)?;

    let hint_minus_one = hint.map(|h| h - 1);
    let parent_idx = find_item(doc, item.origin_left.as_ref(), item.insert_after, hint_minus_one)?;

    // Split: we're inserting as the left anchor's *first child* (not after
    // it), and it currently holds real content — so it must be split in
    // two to make room for this item right after its own content. The real
    // parent keeps its slot; a content-absent placeholder is inserted
    // immediately after it to serve as the split's continuation marker,
    // and the new item follows that.
    if item.origin_left.is_some() && !item.insert_after && parent_idx >= 0 {
        let parent_idx = parent_idx as usize;
        let parent = &doc.content[parent_idx];
        if parent.content.is_some() {
            let placeholder = Item {
                content: None,
                id: parent.id.clone(),
                origin_left: parent.origin_left.clone(),
                origin_right: parent.origin_right.clone(),
                seq: parent.seq,
                insert_after: parent.insert_after,
                is_deleted: parent.is_deleted,
            };
            doc.content.insert(parent_idx + 1, placeholder);
            commit(doc, parent_idx + 2, item);
            return Ok(());
        }
    }

    let mut dest_idx = (parent_idx + 1) as usize;
    while dest_idx < doc.content.len() {
        let o_origin_left = doc.content[dest_idx].origin_left.clone();
        let o_insert_after = doc.content[dest_idx].insert_after;
        let o_agent = doc.content[dest_idx].id.agent.clone();

        let oparent = find_item(doc, o_origin_left.as_ref(), o_insert_after, hint_minus_one)?;

        match oparent.cmp(&parent_idx) {
            Ordering::Less => break,
            Ordering::Equal => {
                if item.id.agent.cmp(&o_agent) == Ordering::Less {
                    break;
                }
            }
            Ordering::Greater => {}
        }

        dest_idx += 1;
    }

    commit(doc, dest_idx, item);
    Ok(())
}

fn commit<T>(doc: &mut Document<T>, dest_idx: usize, item: Item<T>) {
    let visible = item.is_visible();
    doc.content.insert(dest_idx, item);
    if visible {
        doc.length += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::local_insert_sync9;

    #[test]
    fn smoke() {
        let mut doc: Document<char> = Document::new();
        local_insert_sync9(&mut doc, "a", 0, 'a').unwrap();
        local_insert_sync9(&mut doc, "a", 1, 'b').unwrap();
        assert_eq!(doc.get_content(), vec!['a', 'b']);
        doc.dbg_check();
    }

    #[test]
    fn splitting_to_insert_a_first_child() {
        // Agent "a" writes "ab" (b anchored right after a); agent "b"
        // concurrently inserts a child of "a" itself (as first child, not
        // after it), forcing a split of "a".
        let mut doc: Document<char> = Document::new();
        local_insert_sync9(&mut doc, "a", 0, 'a').unwrap();
        local_insert_sync9(&mut doc, "a", 1, 'b').unwrap();

        let a_id = doc.content[0].id.clone();
        let child = Item {
            content: Some('x'),
            id: crate::identifier::Id::new("b", 0),
            origin_left: Some(a_id),
            origin_right: None,
            seq: 0,
            insert_after: false,
            is_deleted: false,
        };
        integrate(&mut doc, child, None).unwrap();
        assert_eq!(doc.get_content(), vec!['a', 'x', 'b']);
        doc.dbg_check();
    }
}

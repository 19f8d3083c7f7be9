//! Automerge-style integration: only `originLeft` is consulted for
//! placement; `seq` (a per-document counter, not per-agent) orders
//! same-parent siblings, descending importance then agent ascending. Known
//! to diverge from Yjs/Sync9 on `interleavingBackward*` and `withTails*` —
//! preserved, not "fixed".
//!
//! Sibling order is ascending by agent — the upstream reference
//! implementation orders descending; this is a deliberate, documented
//! choice (see DESIGN.md).

use std::cmp::Ordering;

use super::common::check_order_and_observe;
use crate::doc::Document;
use crate::error::OpError;
use crate::item::Item;
use crate::lookup::find_item;

pub fn integrate<T>(doc: &mut Document<T>, item: Item<T>, _hint: Option<i64>) -> Result<(), OpError> {
    check_order_and_observe(doc, &item.id)?;

    let parent = find_item(doc, item.origin_left.as_ref(), false, None)?;
    let mut i = (parent + 1) as usize;
    let mut lost_conflict = false;

    while i < doc.content.len() {
        let o_seq = doc.content[i].seq;
        if item.seq > o_seq {
            break;
        }

        let o_origin_left = doc.content[i].origin_left.clone();
        let o_agent = doc.content[i].id.agent.clone();
        let oparent = find_item(doc, o_origin_left.as_ref(), false, None)?;

        match oparent.cmp(&parent) {
            Ordering::Less => break,
            Ordering::Equal => {
                match item.seq.cmp(&o_seq) {
                    Ordering::Greater => break,
                    Ordering::Equal => {
                        if item.id.agent.cmp(&o_agent) == Ordering::Less {
                            break;
                        }
                        lost_conflict = true;
                    }
                    Ordering::Less => {
                        lost_conflict = true;
                    }
                }
            }
            Ordering::Greater => {
                debug_assert!(lost_conflict, "skipping a losing sibling's subtree without having lost a tie-break");
            }
        }

        i += 1;
    }

    doc.max_seq = doc.max_seq.max(item.seq);
    let visible = item.is_visible();
    doc.content.insert(i, item);
    if visible {
        doc.length += 1;
    }
    Ok(())
}

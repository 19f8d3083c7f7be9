//! YjsMod integration: the two-dimensional (oleft vs left, oright vs right)
//! case split that avoids the interleaving pathology when two concurrent
//! runs share a parent.

use std::cmp::Ordering;

use super::common::{check_order_and_observe, commit, yjs_family_integrate, Step};
use crate::doc::Document;
use crate::error::OpError;
use crate::item::Item;

pub fn integrate<T>(doc: &mut Document<T>, item: Item<T>, hint: Option<i64>) -> Result<(), OpError> {
    check_order_and_observe(doc, &item.id)?;

    let dest_idx = yjs_family_integrate(doc, &item, hint, |agent_cmp, oright_cmp| {
        match oright_cmp {
            Ordering::Less => Step::Continue { scanning: true },
            Ordering::Equal => {
                if agent_cmp == Ordering::Less { Step::Break } else { Step::Continue { scanning: false } }
            }
            Ordering::Greater => Step::Continue { scanning: false },
        }
    })?;

    commit(doc, dest_idx, item);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::ops::local_insert;

    #[test]
    fn smoke() {
        let mut doc: Document<char> = Document::new();
        local_insert(&mut doc, Algorithm::YjsMod, "a", 0, 'a').unwrap();
        local_insert(&mut doc, Algorithm::YjsMod, "a", 1, 'b').unwrap();
        assert_eq!(doc.get_content(), vec!['a', 'b']);
        doc.dbg_check();
    }

    #[test]
    fn concurrent_root_inserts_tie_break_by_agent() {
        let mut doc: Document<char> = Document::new();
        let a = Item { content: Some('a'), id: crate::identifier::Id::new("A", 0), origin_left: None, origin_right: None, seq: 1, insert_after: false, is_deleted: false };
        let b = Item { content: Some('b'), id: crate::identifier::Id::new("B", 0), origin_left: None, origin_right: None, seq: 1, insert_after: false, is_deleted: false };
        integrate(&mut doc, b, None).unwrap();
        integrate(&mut doc, a, None).unwrap();
        assert_eq!(doc.get_content(), vec!['a', 'b']);
        doc.dbg_check();
    }
}

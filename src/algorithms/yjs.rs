//! Classic Yjs integration: same scaffolding as YjsMod, with a different
//! case split when two items share a left anchor. Known to diverge from
//! YjsMod on `withTails2` — preserved, not "fixed".

use std::cmp::Ordering;

use super::common::{check_order_and_observe, commit, yjs_family_integrate, Step};
use crate::doc::Document;
use crate::error::OpError;
use crate::item::Item;

pub fn integrate<T>(doc: &mut Document<T>, item: Item<T>, hint: Option<i64>) -> Result<(), OpError> {
    check_order_and_observe(doc, &item.id)?;

    let dest_idx = yjs_family_integrate(doc, &item, hint, |agent_cmp, oright_cmp| {
        if agent_cmp == Ordering::Greater {
            Step::Continue { scanning: false }
        } else if oright_cmp == Ordering::Equal {
            Step::Break
        } else {
            Step::Continue { scanning: true }
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
        local_insert(&mut doc, Algorithm::Yjs, "a", 0, 'a').unwrap();
        local_insert(&mut doc, Algorithm::Yjs, "a", 1, 'b').unwrap();
        assert_eq!(doc.get_content(), vec!['a', 'b']);
        doc.dbg_check();
    }
}

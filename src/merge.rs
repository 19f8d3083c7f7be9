//! Transferring missing items from one document to another, respecting
//! causal readiness.

use crate::algorithms::{self, can_insert_now, Algorithm};
use crate::doc::Document;
use crate::error::OpError;
use crate::item::Item;

/// Integrate every item `src` has that `dest` doesn't, in causal order.
/// Confluent: the resulting `dest.content` depends only on the set of
/// integrated ids, not on the order items happen to become ready in.
pub fn merge_into<T: Clone>(
    dest: &mut Document<T>,
    src: &Document<T>,
    algorithm: Algorithm,
) -> Result<(), OpError> {
    let mut missing: Vec<Item<T>> = src.content.iter()
        .filter(|item| item.content.is_some() && !dest.version.contains(&item.id))
        .cloned()
        .collect();

    while !missing.is_empty() {
        let mut progressed = false;
        let mut i = 0;
        while i < missing.len() {
            if can_insert_now(&missing[i], dest) {
                let item = missing.remove(i);
                algorithms::integrate(algorithm, dest, item, None)?;
                progressed = true;
            } else {
                i += 1;
            }
        }
        if !progressed {
            // The missing set isn't causally closed: no item in it ever
            // became ready.
            return Err(OpError::UnresolvableDependency);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::local_insert;

    #[test]
    fn round_trip_converges() {
        let mut a: Document<char> = Document::new();
        let mut b: Document<char> = Document::new();

        local_insert(&mut a, Algorithm::YjsMod, "a", 0, 'a').unwrap();
        local_insert(&mut b, Algorithm::YjsMod, "b", 0, 'b').unwrap();

        merge_into(&mut b, &a, Algorithm::YjsMod).unwrap();
        merge_into(&mut a, &b, Algorithm::YjsMod).unwrap();

        assert_eq!(a.get_content(), b.get_content());
        a.dbg_check();
        b.dbg_check();
    }

    #[test]
    fn merge_is_idempotent() {
        let mut a: Document<char> = Document::new();
        let mut b: Document<char> = Document::new();

        local_insert(&mut a, Algorithm::YjsMod, "a", 0, 'a').unwrap();
        local_insert(&mut a, Algorithm::YjsMod, "a", 1, 'b').unwrap();

        merge_into(&mut b, &a, Algorithm::YjsMod).unwrap();
        let content_after_first = b.get_content();
        merge_into(&mut b, &a, Algorithm::YjsMod).unwrap();

        assert_eq!(b.get_content(), content_after_first);
    }

    #[test]
    fn unresolvable_dependency_is_reported() {
        // `src` has an item anchored to an id `dest` has never seen and
        // never will: the missing set isn't causally closed.
        let mut src: Document<char> = Document::new();
        src.content.push(crate::item::Item {
            content: Some('x'),
            id: crate::identifier::Id::new("a", 5),
            origin_left: Some(crate::identifier::Id::new("a", 4)),
            origin_right: None,
            seq: 1,
            insert_after: false,
            is_deleted: false,
        });

        let mut dest: Document<char> = Document::new();
        let err = merge_into(&mut dest, &src, Algorithm::YjsMod).unwrap_err();
        assert_eq!(err, OpError::UnresolvableDependency);
    }
}

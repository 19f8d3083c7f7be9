//! Randomized properties: a single-agent sequential fuzz checked against a
//! naive reference list, and a multi-document fuzz checking that pairwise
//! merges always converge.

use rand::prelude::*;

use sequence_crdt::{local_insert, local_insert_sync9, merge_into, Algorithm, Document};

const ALGORITHMS: [Algorithm; 4] =
    [Algorithm::YjsMod, Algorithm::Yjs, Algorithm::Automerge, Algorithm::Sync9];

fn insert_at(doc: &mut Document<char>, algorithm: Algorithm, agent: &str, pos: usize, ch: char) {
    match algorithm {
        Algorithm::Sync9 => local_insert_sync9(doc, agent, pos, ch).unwrap(),
        other => local_insert(doc, other, agent, pos, ch).unwrap(),
    };
}

/// 1,000 random single-agent inserts, checked after every step against a
/// plain `Vec<char>` reference maintained alongside the document.
#[test]
fn random_single_document() {
    for algorithm in ALGORITHMS {
        let mut rng = SmallRng::seed_from_u64(10);
        let mut doc: Document<char> = Document::new();
        let mut reference: Vec<char> = Vec::new();

        for _ in 0..1000 {
            let pos = rng.gen_range(0..=reference.len());
            let ch = (b'a' + rng.gen_range(0..26u8)) as char;

            insert_at(&mut doc, algorithm, "seph", pos, ch);
            reference.insert(pos, ch);

            assert_eq!(doc.get_content(), reference, "{} diverged", algorithm.name());
        }

        doc.dbg_check();
    }
}

/// Three agents, 1,000 rounds of a random local insert each followed by a
/// random pairwise merge (both directions, so the pair is fully caught up).
/// After every round the two merged documents must produce equal
/// `get_content` — deletes are excluded here since they're local-only and
/// never propagate through `merge_into`, so they'd break the equality this
/// property is checking.
#[test]
fn random_multidoc_merge() {
    for algorithm in ALGORITHMS {
        let mut rng = SmallRng::seed_from_u64(20);
        let agents = ["a", "b", "c"];
        let mut docs: [Document<char>; 3] =
            [Document::new(), Document::new(), Document::new()];

        for _round in 0..1000 {
            for (idx, agent) in agents.iter().enumerate() {
                let doc = &mut docs[idx];
                let len = doc.get_content().len();
                let pos = rng.gen_range(0..=len);
                let ch = (b'a' + rng.gen_range(0..26u8)) as char;
                insert_at(doc, algorithm, agent, pos, ch);
            }

            let i = rng.gen_range(0..3);
            let j = (i + 1 + rng.gen_range(0..2)) % 3;
            let (lo, hi) = if i < j { (i, j) } else { (j, i) };

            let (left, right) = docs.split_at_mut(hi);
            merge_into(&mut left[lo], &right[0], algorithm).unwrap();
            merge_into(&mut right[0], &left[lo], algorithm).unwrap();

            assert_eq!(
                left[lo].get_content(),
                right[0].get_content(),
                "{}: round {_round} didn't converge",
                algorithm.name()
            );
            left[lo].dbg_check();
            right[0].dbg_check();
        }

        for doc in &docs {
            doc.dbg_check();
        }
    }
}

//! Fatal error conditions. Every variant signals a violated invariant or a
//! malformed input; there is no recovery surface.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::identifier::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// `integrate` was handed an item whose seq isn't exactly one past the
    /// last seq seen from that agent.
    OutOfOrder { id: Id, expected_seq: u32 },
    /// A non-root anchor identifier isn't present in the document's content.
    ItemNotFound { id: Id },
    /// `find_item_at_pos` was asked for a position past the visible length.
    PositionOutOfRange { pos: usize, len: usize },
    /// `merge_into` made no progress in a full pass over the missing set.
    UnresolvableDependency,
}

impl Display for OpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OpError::OutOfOrder { id, expected_seq } => write!(
                f, "out-of-order integrate: got {}/{} but expected seq {}",
                id.agent, id.seq, expected_seq
            ),
            OpError::ItemNotFound { id } => write!(f, "item not found: {}/{}", id.agent, id.seq),
            OpError::PositionOutOfRange { pos, len } => write!(
                f, "position {} out of range (visible length {})", pos, len
            ),
            OpError::UnresolvableDependency => write!(
                f, "merge made no progress: missing set is not causally closed"
            ),
        }
    }
}

impl Error for OpError {}

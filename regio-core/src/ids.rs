//! Typed ID newtype for arena slots.
//!
//! `#[repr(transparent)]` + `Copy`, so wrapping the raw index costs nothing
//! at runtime — the compiler enforces the type boundary at zero cost.

use std::fmt;

/// Arena slot index into [`DivisionTree`](crate::tree::DivisionTree).
///
/// Slot 0 is always the synthetic root. Ids are only meaningful for the
/// tree that produced them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The synthetic root's slot.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_usize(v: usize) -> Self {
        debug_assert!(v <= u32::MAX as usize, "arena index overflows u32");
        Self(v as u32)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_roundtrip() {
        let id = NodeId::from_usize(42);
        assert_eq!(id, NodeId(42));
        assert_eq!(id.as_usize(), 42);
    }

    #[test]
    #[should_panic(expected = "arena index overflows u32")]
    #[cfg(all(debug_assertions, target_pointer_width = "64"))]
    fn oversized_arena_index_is_rejected() {
        NodeId::from_usize(u32::MAX as usize + 1);
    }
}

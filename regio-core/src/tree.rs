//! Arena-backed division tree.
//!
//! All nodes live in a single `Vec` arena; parent and child links are
//! [`NodeId`] indices into it, not owning pointers. Slot 0 is the synthetic
//! nation-level root. The tree is linked exactly once by the builder and
//! never mutated afterwards, so it is safe to share read-only across threads
//! with no locking.

use crate::ids::NodeId;
use crate::region::Region;

/// One node in the arena: a record plus its links.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) region: Region,
    /// `None` for the root and for orphans that never got attached.
    pub(crate) parent: Option<NodeId>,
    /// Insertion order — input order, not sorted.
    pub(crate) children: Vec<NodeId>,
}

/// Diagnostic counters from a build.
///
/// Orphans are a silent, non-fatal condition: the node stays in the arena
/// but is unreachable from the root. The counters give data-quality
/// visibility without failing the build.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Input records consumed (excludes the synthetic root).
    pub records: usize,
    /// Nodes reachable from the root, including the root itself.
    pub reachable: usize,
    /// Records whose parent_code resolved to no known code.
    pub orphans: usize,
}

/// A fully built, read-only administrative-division hierarchy.
///
/// Produced by [`build_tree`](crate::build::build_tree). Code lookup is
/// served from a retained sorted index over *reachable* nodes (see
/// [`query`](crate::query)); orphaned arena slots are deliberately absent
/// from it, so looking up an orphan's code reports "not found", the same
/// answer a root traversal would give.
#[derive(Debug)]
pub struct DivisionTree {
    pub(crate) nodes: Vec<Node>,
    /// Reachable NodeIds sorted by region code; binary-search target.
    pub(crate) code_index: Vec<NodeId>,
    pub(crate) stats: BuildStats,
}

impl DivisionTree {
    /// The synthetic root.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Total arena size: input records plus the synthetic root, orphans
    /// included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        // Never true: the root always exists.
        self.nodes.is_empty()
    }

    /// The record stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this tree.
    #[inline]
    pub fn region(&self, id: NodeId) -> &Region {
        &self.nodes[id.as_usize()].region
    }

    /// Parent link, `None` for the root and for orphans.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.as_usize()].parent
    }

    /// Direct children in input order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.as_usize()].children
    }

    /// Build diagnostics.
    #[inline]
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Walk parent links from `id` up to, but not including, the synthetic
    /// root, yielding `id` first.
    ///
    /// Terminates when the parent link is `None` or points at a
    /// nation-level node. The walk additionally carries a step budget of
    /// `len()`, so a corrupt parent chain forming a cycle ends the
    /// iteration instead of looping forever.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
            budget: self.nodes.len(),
        }
    }
}

/// Iterator over a node and its forebears, child-to-root order, root
/// excluded. See [`DivisionTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a DivisionTree,
    next: Option<NodeId>,
    budget: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.budget == 0 {
            return None;
        }
        self.budget -= 1;

        let current = self.next?;
        self.next = match self.tree.parent(current) {
            Some(p) if !self.tree.region(p).level.is_nation() => Some(p),
            _ => None,
        };
        Some(current)
    }
}

//! Query engine over a built [`DivisionTree`].
//!
//! Two operations: exact lookup by code and substring lookup by name. Code
//! lookup binary-searches the retained reachable-node index, O(log N) per
//! query; the index is kept after the build deliberately, trading one
//! `Vec<NodeId>` of memory for not re-walking the tree on every call. Name
//! search has no secondary index and stays an O(N) depth-first traversal.
//!
//! Both operations see only nodes reachable from the root. A miss is a
//! plain `None` / empty result, never an error.

use crate::ids::NodeId;
use crate::tree::DivisionTree;
use serde::{Deserialize, Serialize};

/// Tuning knobs for [`search_by_name`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Stop the traversal after this many hits.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions { limit: 5 }
    }
}

/// Result set of a name search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameMatches {
    /// Matching nodes in depth-first encounter order.
    pub hits: Vec<NodeId>,
    /// The hit cap was reached and the traversal stopped early; more
    /// matches may exist beyond the ones returned.
    pub truncated: bool,
}

impl NameMatches {
    /// Matches found before the traversal ended.
    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Exact code lookup.
///
/// Returns the unique reachable node whose code equals `code`, or `None`.
/// Orphans are invisible here by construction: the query index only covers
/// nodes a traversal from the root would visit.
pub fn find_by_code(tree: &DivisionTree, code: &str) -> Option<NodeId> {
    tree.code_index
        .binary_search_by(|&id| tree.region(id).code.as_str().cmp(code))
        .ok()
        .map(|pos| tree.code_index[pos])
}

/// Case-sensitive substring search over division names.
///
/// Depth-first pre-order from the root; hits are emitted in encounter
/// order. The traversal stops as soon as `opts.limit` hits are collected
/// and flags the result as truncated. Zero hits is a valid outcome.
pub fn search_by_name(tree: &DivisionTree, pattern: &str, opts: &SearchOptions) -> NameMatches {
    let mut out = NameMatches::default();
    if opts.limit == 0 {
        out.truncated = true;
        return out;
    }

    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        if tree.region(id).name.contains(pattern) {
            out.hits.push(id);
            if out.hits.len() >= opts.limit {
                out.truncated = true;
                return out;
            }
        }
        // Reversed push keeps pre-order: first child is visited next.
        stack.extend(tree.children(id).iter().rev());
    }
    out
}

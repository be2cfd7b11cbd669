//! Hierarchy builder.
//!
//! Turns the loader's flat, ordered record sequence into a rooted
//! [`DivisionTree`]. Parent resolution goes through a transient sorted code
//! index and binary search — O(N log N) for the whole build — instead of a
//! naive O(N²) pairwise scan.
//!
//! ## Data-quality policy
//!
//! - **Duplicate codes** reject the build ([`BuildError::DuplicateCode`]):
//!   binary search is undefined over duplicate keys, and a dataset that
//!   violates code uniqueness is corrupt, not merely untidy.
//! - **Orphans** (parent_code resolving to nothing) are accepted silently:
//!   the node stays unattached and unreachable from the root, and the total
//!   is reported via [`BuildStats`] and a single `warn!`.

use crate::error::{BuildError, Result};
use crate::ids::NodeId;
use crate::region::Region;
use crate::tree::{BuildStats, DivisionTree, Node};
use tracing::{debug, warn};

/// Build a division tree from an ordered record sequence.
///
/// Every record becomes exactly one node, in input order; a synthetic
/// nation-level root is prepended at arena slot 0. Records whose
/// `parent_code` is the no-parent sentinel attach directly under the root;
/// all others resolve their parent by binary search over the code index.
pub fn build_tree(records: Vec<Region>) -> Result<DivisionTree> {
    let record_count = records.len();

    // Slot 0 is the root; record i lands at slot i + 1.
    let mut nodes = Vec::with_capacity(record_count + 1);
    nodes.push(Node {
        region: Region::synthetic_root(),
        parent: None,
        children: Vec::new(),
    });
    for region in records {
        nodes.push(Node {
            region,
            parent: None,
            children: Vec::new(),
        });
    }

    // Transient parent-resolution index over the input records, sorted by
    // code (byte-wise). Ties broken by slot keeps the sort total even
    // though equal codes are about to be rejected.
    let mut index: Vec<NodeId> = (1..nodes.len()).map(NodeId::from_usize).collect();
    index.sort_unstable_by(|&a, &b| {
        nodes[a.as_usize()]
            .region
            .code
            .as_str()
            .cmp(&nodes[b.as_usize()].region.code)
            .then(a.cmp(&b))
    });

    if let Some(dup) = first_duplicate(&nodes, &index) {
        return Err(BuildError::DuplicateCode {
            code: nodes[dup.as_usize()].region.code.clone(),
        });
    }

    debug!(records = record_count, "code index sorted, linking nodes");

    // Link pass, input order. Attachment happens exactly once per node.
    let mut orphans = 0usize;
    for slot in 1..nodes.len() {
        let child = NodeId::from_usize(slot);
        if nodes[slot].region.is_top_level() {
            attach(&mut nodes, NodeId::ROOT, child);
            continue;
        }
        let search = index.binary_search_by(|&id| {
            nodes[id.as_usize()]
                .region
                .code
                .as_str()
                .cmp(&nodes[slot].region.parent_code)
        });
        match search {
            Ok(pos) => attach(&mut nodes, index[pos], child),
            Err(_) => orphans += 1,
        }
    }

    if orphans > 0 {
        warn!(
            orphans,
            records = record_count,
            "records with unresolvable parent_code left unattached"
        );
    }

    // The retained query index covers reachable nodes only, so a lookup
    // answers exactly what a root traversal would: orphans are "not found".
    let code_index = reachable_code_index(&nodes);
    let stats = BuildStats {
        records: record_count,
        reachable: code_index.len(),
        orphans,
    };
    debug!(
        reachable = stats.reachable,
        orphans = stats.orphans,
        "division tree built"
    );

    Ok(DivisionTree {
        nodes,
        code_index,
        stats,
    })
}

fn attach(nodes: &mut [Node], parent: NodeId, child: NodeId) {
    nodes[parent.as_usize()].children.push(child);
    nodes[child.as_usize()].parent = Some(parent);
}

/// First member of an adjacent equal-code pair in the sorted index, if any.
fn first_duplicate(nodes: &[Node], index: &[NodeId]) -> Option<NodeId> {
    index
        .windows(2)
        .find(|w| nodes[w[0].as_usize()].region.code == nodes[w[1].as_usize()].region.code)
        .map(|w| w[0])
}

/// Depth-first pass from the root collecting every reachable node, then
/// sorted by code for binary search. Unattached subtrees never get visited,
/// which is exactly the query-visibility contract.
fn reachable_code_index(nodes: &[Node]) -> Vec<NodeId> {
    let mut reachable = Vec::with_capacity(nodes.len());
    let mut stack = vec![NodeId::ROOT];
    while let Some(id) = stack.pop() {
        reachable.push(id);
        // Reverse so pre-order matches input order, not that the index
        // cares — it gets re-sorted below.
        stack.extend(nodes[id.as_usize()].children.iter().rev());
    }
    reachable.sort_unstable_by(|&a, &b| {
        nodes[a.as_usize()]
            .region
            .code
            .as_str()
            .cmp(&nodes[b.as_usize()].region.code)
    });
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::region::NO_PARENT;

    #[test]
    fn build_counts_all_records() {
        let tree = build_tree(vec![
            Region::new("11", "北京市", Level::PROVINCE, NO_PARENT, 0),
            Region::new("1101", "市辖区", Level::PREFECTURE, "11", 0),
        ])
        .unwrap();
        // N records + synthetic root.
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.stats().records, 2);
        assert_eq!(tree.stats().reachable, 3);
        assert_eq!(tree.stats().orphans, 0);
    }

    #[test]
    fn orphan_does_not_fail_build() {
        let tree = build_tree(vec![
            Region::new("11", "北京市", Level::PROVINCE, NO_PARENT, 0),
            Region::new("5301", "昆明市", Level::PREFECTURE, "99", 0),
        ])
        .unwrap();
        assert_eq!(tree.stats().orphans, 1);
        // Orphan occupies an arena slot but is not reachable.
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.stats().reachable, 2);
    }

    #[test]
    fn duplicate_code_rejects_build() {
        let err = build_tree(vec![
            Region::new("1101", "东城区", Level::COUNTY, NO_PARENT, 0),
            Region::new("1101", "西城区", Level::COUNTY, NO_PARENT, 0),
        ])
        .unwrap_err();
        assert!(matches!(err, BuildError::DuplicateCode { code } if code == "1101"));
    }

    #[test]
    fn child_may_skip_a_level() {
        // Malformed-but-resolvable input: county attached directly to a
        // province. Structurally accepted; level is informational.
        let tree = build_tree(vec![
            Region::new("11", "北京市", Level::PROVINCE, NO_PARENT, 0),
            Region::new("110101", "东城区", Level::COUNTY, "11", 0),
        ])
        .unwrap();
        let province = crate::query::find_by_code(&tree, "11").unwrap();
        assert_eq!(tree.children(province).len(), 1);
    }

    #[test]
    fn empty_input_builds_root_only() {
        let tree = build_tree(Vec::new()).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.children(tree.root()).is_empty());
    }
}

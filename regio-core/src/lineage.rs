//! Ancestor-chain rendering.
//!
//! Pure projection of the parent walk into `(level, name)` pairs for the
//! display layer. The traversal contract — child-to-root order, the node
//! itself and the synthetic root both excluded, termination on a
//! nation-level parent — is the core's guarantee; formatting belongs to the
//! caller.

use crate::ids::NodeId;
use crate::level::Level;
use crate::tree::DivisionTree;
use serde::Serialize;

/// One step of an ancestor chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineageEntry {
    pub level: Level,
    pub name: String,
}

/// The ancestor chain of `id`: every node reached by following parent
/// links, child-to-root order, stopping before the synthetic root. The
/// starting node is not part of its own chain.
///
/// For well-formed data the chain has fewer than `level` entries; for
/// corrupt parent links it is bounded by the arena size (see
/// [`DivisionTree::ancestors`]).
pub fn lineage(tree: &DivisionTree, id: NodeId) -> Vec<LineageEntry> {
    tree.ancestors(id)
        .skip(1)
        .map(|n| {
            let region = tree.region(n);
            LineageEntry {
                level: region.level,
                name: region.name.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_tree;
    use crate::level::Level;
    use crate::query::find_by_code;
    use crate::region::{Region, NO_PARENT};

    #[test]
    fn lineage_is_child_to_root() {
        let tree = build_tree(vec![
            Region::new("11", "北京市", Level::PROVINCE, NO_PARENT, 0),
            Region::new("1101", "市辖区", Level::PREFECTURE, "11", 0),
            Region::new("110101", "东城区", Level::COUNTY, "1101", 0),
        ])
        .unwrap();

        let id = find_by_code(&tree, "110101").unwrap();
        let chain = lineage(&tree, id);
        assert_eq!(
            chain,
            vec![
                LineageEntry { level: Level::PREFECTURE, name: "市辖区".into() },
                LineageEntry { level: Level::PROVINCE, name: "北京市".into() },
            ]
        );
    }

    #[test]
    fn province_has_empty_lineage() {
        let tree = build_tree(vec![Region::new(
            "11",
            "北京市",
            Level::PROVINCE,
            NO_PARENT,
            0,
        )])
        .unwrap();
        let id = find_by_code(&tree, "11").unwrap();
        assert!(lineage(&tree, id).is_empty());
    }

    #[test]
    fn lineage_steps_bounded_by_level() {
        let tree = build_tree(vec![
            Region::new("11", "北京市", Level::PROVINCE, NO_PARENT, 0),
            Region::new("1101", "市辖区", Level::PREFECTURE, "11", 0),
        ])
        .unwrap();
        let id = find_by_code(&tree, "1101").unwrap();
        assert!(lineage(&tree, id).len() < tree.region(id).level.as_u8() as usize + 1);
    }
}

//! # Regio Core
//!
//! In-memory hierarchy engine for administrative-division datasets
//! (nation → province → prefecture → county → township → village).
//!
//! This crate provides:
//! - The flat `Region` record model and `Level` depth type
//! - An arena-backed `DivisionTree` built in O(N log N) via a sorted code
//!   index (binary-search parent resolution, not a pairwise scan)
//! - A query engine: exact code lookup and capped substring name search
//! - Ancestor-chain (`lineage`) rendering for the display layer
//!
//! ## Design Principles
//!
//! 1. **Build once, read forever**: the tree is linked once and never
//!    mutated; post-build it is freely shareable across threads
//! 2. **Arena links**: parent/child references are indices, not pointers —
//!    single-owner teardown, no reference counting
//! 3. **Misses are data, not errors**: failed lookups are `None`/empty,
//!    orphaned records are counted, only duplicate codes fail a build
//!
//! ## Example
//!
//! ```
//! use regio_core::{build_tree, find_by_code, lineage, Level, Region, NO_PARENT};
//!
//! let tree = build_tree(vec![
//!     Region::new("11", "北京市", Level::PROVINCE, NO_PARENT, 0),
//!     Region::new("1101", "东城区", Level::PREFECTURE, "11", 0),
//! ])?;
//! let id = find_by_code(&tree, "1101").expect("present in input");
//! assert_eq!(lineage(&tree, id)[0].name, "北京市");
//! # Ok::<(), regio_core::BuildError>(())
//! ```

pub mod build;
pub mod error;
pub mod ids;
pub mod level;
pub mod lineage;
pub mod query;
pub mod region;
pub mod tree;

// Re-export main types
pub use build::build_tree;
pub use error::{BuildError, Result};
pub use ids::NodeId;
pub use level::Level;
pub use lineage::{lineage, LineageEntry};
pub use query::{find_by_code, search_by_name, NameMatches, SearchOptions};
pub use region::{Region, NO_PARENT, ROOT_CODE, ROOT_NAME};
pub use tree::{Ancestors, BuildStats, DivisionTree};

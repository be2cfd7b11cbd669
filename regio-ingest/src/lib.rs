//! Delimited-text ingestion for Regio.
//!
//! This crate owns the messy boundary between the on-disk dataset and the
//! typed record sequence the core's hierarchy builder consumes. It parses
//! and sanitizes; it never links nodes or answers queries.
//!
//! # Design
//!
//! - **Order-preserving**: records come out in file order, which is the
//!   order the builder and the tree's child collections rely on
//! - **Lenient rows, strict values**: unparseable rows are skipped with a
//!   warning, but a value that does parse is taken literally — sentinel
//!   mapping (`N/A`, placeholder zero price) happens here, once

pub mod error;
pub mod loader;

pub use error::{IngestError, Result};
pub use loader::{load_regions, read_regions};

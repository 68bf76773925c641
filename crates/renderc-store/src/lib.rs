//! renderc Store - schema snapshot import
//!
//! Provides:
//! - Snapshot Format v0: a YAML description of an already-parsed schema graph
//! - Parser with version and structural validation
//! - Importer building the arena-backed `Schema` of `renderc-core`

pub mod errors;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use seed::{import_snapshot_file, import_snapshot_str, SnapshotV0};

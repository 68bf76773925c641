//! Snapshot import system
//!
//! Provides:
//! - Snapshot Format v0 schema
//! - YAML parser with validation
//! - Importer orchestration

pub mod format_v0;
pub mod importer;
pub mod parser;

pub use format_v0::SnapshotV0;
pub use importer::{import_snapshot, import_snapshot_file, import_snapshot_str};
pub use parser::{parse_snapshot_file, parse_snapshot_str};

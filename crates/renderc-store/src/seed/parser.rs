//! Snapshot parser with validation
//!
//! Parses YAML and validates the schema version and name uniqueness that the
//! YAML structure alone cannot express

use crate::errors::{from_yaml, io_error, snapshot_validation, unsupported_version, Result};
use crate::seed::format_v0::SnapshotV0;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a snapshot file from a path
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise as [`parse_snapshot_str`].
pub fn parse_snapshot_file(path: &Path) -> Result<SnapshotV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("snapshot_read", e))?;

    parse_snapshot_str(&content)
}

/// Parse a snapshot from a string
///
/// # Errors
///
/// Returns `Serialization` for malformed YAML, `UnsupportedVersion` for a
/// `schema_version` other than 0 and `InvalidInput` for duplicate apps or a
/// self-referential proxy.
pub fn parse_snapshot_str(content: &str) -> Result<SnapshotV0> {
    let snapshot: SnapshotV0 = serde_yaml::from_str(content).map_err(from_yaml)?;

    validate_snapshot(&snapshot)?;

    Ok(snapshot)
}

/// Validate a parsed snapshot
fn validate_snapshot(snapshot: &SnapshotV0) -> Result<()> {
    if snapshot.schema_version != 0 {
        return Err(unsupported_version(snapshot.schema_version));
    }

    if snapshot.package.trim().is_empty() {
        return Err(snapshot_validation("package must not be empty"));
    }

    let mut app_names = HashSet::new();
    for app in &snapshot.apps {
        if !app_names.insert(app.name.as_str()) {
            return Err(snapshot_validation(&format!("Duplicate app {}", app.name)));
        }

        for span in &app.spans {
            if let Some(proxy) = &span.proxy {
                if proxy.app == app.name && proxy.span == span.name {
                    return Err(snapshot_validation(&format!(
                        "Proxy span {}.{} names itself as its remote span",
                        app.name, span.name
                    )));
                }
            }
        }
    }

    Ok(())
}
